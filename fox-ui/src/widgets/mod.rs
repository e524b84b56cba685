pub mod button;
pub mod label;
pub mod panel;
pub mod textbox;

pub use button::Chrome;
pub use label::{Text, TextCache};
pub use panel::{Delegates, Widget};
pub use textbox::{Caret, CaretOutcome, TEXT_INSET};
