// Table I/O boundary. The round engine reads hit decisions and writes hands
// and announcements only through this trait, so the console front end and
// scripted test tables are interchangeable.

use crate::game::GameError;
use crate::hand::Hand;
use crate::participant::Announcement;

pub trait TableIo {
    /// Ask the named player whether they want another card.
    fn ask_hit(&mut self, name: &str) -> Result<bool, GameError>;

    /// Render a hand (name, cards, total when revealed).
    fn show_hand(&mut self, hand: &Hand) -> Result<(), GameError>;

    /// Report a bust, win, loss or push.
    fn announce(&mut self, announcement: &Announcement<'_>) -> Result<(), GameError>;
}
