#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Self = Self { r: 0x00, g: 0x00, b: 0x00, a: 0x00 };

    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Self = Self::rgb(0xFF, 0xFF, 0xFF);

    /// Default widget face color.
    pub const CONTROL: Self = Self::rgb(0xC0, 0xC0, 0xC0);

    pub const WINTER_WOLF: Self = Self::rgb(0xE0, 0xE0, 0xE0);
    pub const LIGHT_GREY: Self = Self::rgb(0xCC, 0xCC, 0xCC);
    pub const GREY: Self = Self::rgb(0x88, 0x88, 0x88);
    pub const DARK_GREY: Self = Self::rgb(0x33, 0x33, 0x33);
    pub const BLACK_WOLF: Self = Self::rgb(0x15, 0x15, 0x15);

    pub const RED: Self = Self::rgb(0xFF, 0x00, 0x00);
    pub const GREEN: Self = Self::rgb(0x00, 0xFF, 0x00);
    pub const BLUE: Self = Self::rgb(0x00, 0x00, 0xFF);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn with_alpha(mut self, a: u8) -> Self {
        self.a = a;
        self
    }

    /// Only the alpha channel is compared against the sentinel.
    pub fn is_transparent(&self) -> bool {
        self.a == Self::TRANSPARENT.a
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub w: i32,
    pub h: i32,
}

impl Size {
    pub const fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.x + self.w &&
            p.y >= self.y && p.y < self.y + self.h
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn split_top(&self, height: i32) -> (Rect, Rect) {
        let h = height.min(self.h);
        let top = Rect::new(self.x, self.y, self.w, h);
        let rest = Rect::new(self.x, self.y + h, self.w, self.h - h);
        (top, rest)
    }

    /// Returns (cut bottom strip, remaining top part).
    pub fn split_bottom(&self, height: i32) -> (Rect, Rect) {
        let h = height.min(self.h);
        let rest_h = self.h - h;
        let rest = Rect::new(self.x, self.y, self.w, rest_h);
        let bottom = Rect::new(self.x, self.y + rest_h, self.w, h);
        (bottom, rest)
    }

    pub fn split_left(&self, width: i32) -> (Rect, Rect) {
        let w = width.min(self.w);
        let left = Rect::new(self.x, self.y, w, self.h);
        let rest = Rect::new(self.x + w, self.y, self.w - w, self.h);
        (left, rest)
    }

    pub fn shrink(&self, amount: i32) -> Rect {
        if self.w <= amount * 2 || self.h <= amount * 2 {
            return Rect::new(self.x, self.y, 0, 0);
        }
        Rect::new(
            self.x + amount,
            self.y + amount,
            self.w - amount * 2,
            self.h - amount * 2,
        )
    }

    pub fn center(&self, target_w: i32, target_h: i32) -> Rect {
        let new_x = self.x + (self.w - target_w) / 2;
        let new_y = self.y + (self.h - target_h) / 2;
        Rect::new(new_x, new_y, target_w, target_h)
    }
}

/// CSS order: top, right, bottom, left.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Padding {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Padding {
    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self { top, right, bottom, left }
    }

    pub const fn symmetric(vertical: i32, horizontal: i32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    pub const fn zero() -> Self {
        Self::new(0, 0, 0, 0)
    }

    pub fn has_vertical(&self) -> bool {
        self.top != 0 || self.bottom != 0
    }

    pub fn has_horizontal(&self) -> bool {
        self.left != 0 || self.right != 0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HorizontalAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VerticalAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}
