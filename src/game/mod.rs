// Game modules: the player, the projectiles it fires and the session driving them

pub mod bullet;
pub mod player;
pub mod session;

pub use bullet::{Bullet, BulletConfig, BulletId, BulletManager, BulletStatus};
pub use player::{Player, PlayerConfig, PlayerError};
pub use session::GameSession;
