use super::*;

/// Expect the default period before one is set and the stored one afterwards
#[tokio::test]
async fn stores_rotation_period() -> Result<(), TestError> {
    let test = TestBuilder::new().with_competition_tables().build().await?;

    let service = CompetitionQueueService::new(&test.db);
    let default = service.rotation_period().await.unwrap();
    service.set_rotation_period(2).await.unwrap();
    let stored = service.rotation_period().await.unwrap();

    assert_eq!(default, DEFAULT_ROTATION_PERIOD_WEEKS);
    assert_eq!(stored, 2);

    Ok(())
}

/// Expect periods below one week rejected without overwriting the stored value
#[tokio::test]
async fn rejects_period_below_one_week() -> Result<(), TestError> {
    let test = TestBuilder::new().with_competition_tables().build().await?;

    let service = CompetitionQueueService::new(&test.db);
    service.set_rotation_period(3).await.unwrap();
    let zero = service.set_rotation_period(0).await;
    let negative = service.set_rotation_period(-1).await;

    assert!(matches!(
        zero,
        Err(Error::CompetitionError(CompetitionError::InvalidRotationPeriod(0)))
    ));
    assert!(negative.is_err());
    assert_eq!(service.rotation_period().await.unwrap(), 3);

    Ok(())
}
