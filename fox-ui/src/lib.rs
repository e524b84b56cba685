pub mod fonts;
pub mod input;
pub mod observable;
pub mod renderer;
pub mod sink;
pub mod tree;
pub mod types;
pub mod ui;
pub mod widgets;

pub use fonts::{font_key, FontCache, FontFace, DEFAULT_FONT, FONT_FAMILIES, FONT_SIZES};
pub use input::{Event, Key, KeyEvent, MouseButton, PointerEvent, TextEvent, WheelEvent};
pub use observable::{Delegate, Observable};
pub use renderer::{blink_on, DrawContext, FontHandle, TextError, TextTexture, UiRenderer};
pub use sink::{ErrorSink, LogSink, Severity};
pub use tree::{WidgetId, WidgetTree};
pub use types::{Color, HorizontalAlign, Padding, Point, Rect, Size, VerticalAlign};
pub use ui::{Ui, CLEAR_COLOR, FPS_FONT};
pub use widgets::{Caret, Chrome, Delegates, Widget};
