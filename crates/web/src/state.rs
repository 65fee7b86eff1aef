use storage::Database;
use storage::cache::TtlCache;
use storage::dto::taste::TasteProfile;

/// Shared application state. Cache handles are cheap clones over the same
/// underlying maps, initialized once at startup.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub match_cache: TtlCache<i64>,
    pub taste_cache: TtlCache<TasteProfile>,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self {
            db,
            match_cache: TtlCache::new(),
            taste_cache: TtlCache::new(),
        }
    }
}
