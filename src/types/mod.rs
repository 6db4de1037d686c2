pub mod player_id;

pub use player_id::PlayerId;
