/// Point-in-time context a catalog query is resolved against.
///
/// `Current` reads the rows whose validity covers today, which excludes
/// both closed stints and ones dated to start in the future; `Season`
/// widens the window to interval overlap with that season's date range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TemporalContext {
    Current,
    Season(i32),
}

impl TemporalContext {
    /// Build from an optional `season_id` query parameter.
    pub fn from_season_param(season_id: Option<i32>) -> Self {
        match season_id {
            Some(id) => Self::Season(id),
            None => Self::Current,
        }
    }
}
