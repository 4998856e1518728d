pub mod badges;
pub mod channel_card;

pub use badges::{category_badge, live_badge};
pub use channel_card::{channel_card, CardState, CARD_WIDTH};
