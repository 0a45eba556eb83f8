use std::{collections::HashMap, sync::Arc};

use entity::sea_orm_active_enums::Track;
use sea_orm::DatabaseConnection;
use tokio::sync::Mutex;

use crate::client::{discord::MessageGateway, wom::TrackingService};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub tracker: Arc<dyn TrackingService>,
    pub messenger: Arc<dyn MessageGateway>,
    pub channels: ChannelConfig,
    pub wom_group: WomGroup,
    pub signatures: SignatureCache,
}

/// Discord channels the engine posts into.
#[derive(Clone, Debug)]
pub struct ChannelConfig {
    pub sotw: String,
    pub botw: String,
    pub hall_of_fame: String,
}

impl ChannelConfig {
    /// Channel holding the announcement and live leaderboard for a track.
    pub fn for_track(&self, track: Track) -> &str {
        match track {
            Track::Sotw => &self.sotw,
            Track::Botw => &self.botw,
        }
    }
}

/// Wise Old Man group that owns every created competition.
#[derive(Clone, Debug)]
pub struct WomGroup {
    pub id: i64,
    pub verification_code: String,
}

/// Last rendered content signature per announcement message id.
///
/// Lost on restart, which only costs one redundant edit per message.
#[derive(Clone, Default)]
pub struct SignatureCache(Arc<Mutex<HashMap<String, String>>>);

impl SignatureCache {
    pub async fn matches(&self, message_id: &str, signature: &str) -> bool {
        self.0
            .lock()
            .await
            .get(message_id)
            .is_some_and(|cached| cached == signature)
    }

    pub async fn store(&self, message_id: &str, signature: String) {
        self.0.lock().await.insert(message_id.to_string(), signature);
    }

    pub async fn forget(&self, message_id: &str) {
        self.0.lock().await.remove(message_id);
    }
}
