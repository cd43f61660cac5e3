//! Calculator keypad
//!
//! ```text
//! [  C  ] [ +/− ] [  %  ] [  ÷  ]
//! [  7  ] [  8  ] [  9  ] [  ×  ]
//! [  4  ] [  5  ] [  6  ] [  -  ]
//! [  1  ] [  2  ] [  3  ] [  +  ]
//! [      0      ] [  .  ] [  =  ]
//! ```
//!
//! Buttons can be clicked with the mouse and are highlighted when the
//! matching key is typed.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Widget},
};

use crate::calculator::{CalcKey, Operation};

const COLS: usize = 4;
const ROWS: usize = 5;

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// Key sent to the engine
    pub key: CalcKey,
    /// Grid row
    pub row: usize,
    /// First grid column
    pub col: usize,
    /// Columns covered
    pub span: usize,
    /// Whether the button is highlighted
    pub pressed: bool,
}

impl KeypadButton {
    fn new(key: CalcKey, row: usize, col: usize) -> Self {
        Self {
            key,
            row,
            col,
            span: 1,
            pressed: false,
        }
    }

    /// Label printed on the button
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.key.label()
    }

    /// Whether the button covers grid cell `(row, col)`
    #[must_use]
    pub fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && (self.col..self.col + self.span).contains(&col)
    }

    fn style(&self) -> Style {
        if self.pressed {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }
        match self.key {
            CalcKey::Digit(_) => Style::default().fg(Color::White),
            CalcKey::Operator(_) => Style::default().fg(Color::Yellow),
            CalcKey::Equals => Style::default().fg(Color::Green),
            CalcKey::Clear => Style::default().fg(Color::Red),
            CalcKey::ToggleSign | CalcKey::Percent => Style::default().fg(Color::Cyan),
        }
    }
}

/// The calculator keypad
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard layout
    #[must_use]
    pub fn new() -> Self {
        let digit = CalcKey::Digit;
        let op = CalcKey::Operator;
        let grid: [[CalcKey; COLS]; ROWS - 1] = [
            [
                CalcKey::Clear,
                CalcKey::ToggleSign,
                CalcKey::Percent,
                op(Operation::Divide),
            ],
            [digit('7'), digit('8'), digit('9'), op(Operation::Multiply)],
            [digit('4'), digit('5'), digit('6'), op(Operation::Subtract)],
            [digit('1'), digit('2'), digit('3'), op(Operation::Add)],
        ];

        let mut buttons: Vec<KeypadButton> = grid
            .iter()
            .enumerate()
            .flat_map(|(row, keys)| {
                keys.iter()
                    .enumerate()
                    .map(move |(col, key)| KeypadButton::new(*key, row, col))
            })
            .collect();

        let last = ROWS - 1;
        buttons.push(KeypadButton {
            span: 2,
            ..KeypadButton::new(digit('0'), last, 0)
        });
        buttons.push(KeypadButton::new(digit('.'), last, 2));
        buttons.push(KeypadButton::new(CalcKey::Equals, last, 3));

        Self { buttons }
    }

    /// Number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Grid dimensions (rows, cols)
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (ROWS, COLS)
    }

    /// Button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Button covering grid cell `(row, col)`
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.covers(row, col))
    }

    /// Index of the button sending `key`
    #[must_use]
    pub fn find_button(&self, key: CalcKey) -> Option<usize> {
        self.buttons.iter().position(|b| b.key == key)
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.pressed = false;
        }
    }

    /// Highlights only the button for `key`
    pub fn highlight(&mut self, key: CalcKey) {
        self.release_all();
        if let Some(btn) = self.find_button(key).and_then(|i| self.buttons.get_mut(i)) {
            btn.pressed = true;
        }
    }

    /// Highlighted button, if any
    #[must_use]
    pub fn pressed(&self) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.pressed)
    }

    /// Iterates over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Maps a click inside the bordered `area` to a button index
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        let inner = inner_area(area);
        if x < inner.x || y < inner.y || x >= inner.right() || y >= inner.bottom() {
            return None;
        }

        let btn_width = inner.width / COLS as u16;
        let btn_height = inner.height / ROWS as u16;
        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = ((x - inner.x) / btn_width) as usize;
        let row = ((y - inner.y) / btn_height) as usize;
        self.buttons.iter().position(|b| b.covers(row, col))
    }
}

fn inner_area(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub const fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .render(area, buf);

        let inner = inner_area(area);
        if inner.width < COLS as u16 * 3 || inner.height < ROWS as u16 {
            return;
        }

        let btn_width = inner.width / COLS as u16;
        let btn_height = inner.height / ROWS as u16;

        for btn in self.keypad.buttons() {
            let x = inner.x + btn.col as u16 * btn_width;
            let y = inner.y + btn.row as u16 * btn_height + btn_height / 2;
            let width = btn_width * btn.span as u16;

            let label = format!("[{}]", btn.label());
            let label_width = label.chars().count() as u16;
            let label_x = x + width.saturating_sub(label_width) / 2;
            buf.set_span(label_x, y, &Span::styled(label, btn.style()), width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buf_to_string(buf: &Buffer) -> String {
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    // ===== Layout tests =====

    #[test]
    fn test_keypad_layout() {
        let keypad = Keypad::new();
        assert_eq!(keypad.button_count(), 19);
        assert_eq!(keypad.dimensions(), (5, 4));

        assert_eq!(keypad.get_button_at(0, 0).unwrap().key, CalcKey::Clear);
        assert_eq!(keypad.get_button_at(0, 1).unwrap().key, CalcKey::ToggleSign);
        assert_eq!(keypad.get_button_at(0, 2).unwrap().key, CalcKey::Percent);
        assert_eq!(
            keypad.get_button_at(0, 3).unwrap().key,
            CalcKey::Operator(Operation::Divide)
        );
        assert_eq!(keypad.get_button_at(1, 0).unwrap().key, CalcKey::Digit('7'));
        assert_eq!(
            keypad.get_button_at(2, 3).unwrap().key,
            CalcKey::Operator(Operation::Subtract)
        );
        assert_eq!(keypad.get_button_at(4, 2).unwrap().key, CalcKey::Digit('.'));
        assert_eq!(keypad.get_button_at(4, 3).unwrap().key, CalcKey::Equals);
    }

    #[test]
    fn test_zero_spans_two_columns() {
        let keypad = Keypad::new();
        let left = keypad.get_button_at(4, 0).unwrap();
        let right = keypad.get_button_at(4, 1).unwrap();
        assert_eq!(left, right);
        assert_eq!(left.key, CalcKey::Digit('0'));
        assert_eq!(left.span, 2);
    }

    #[test]
    fn test_out_of_grid() {
        let keypad = Keypad::new();
        assert!(keypad.get_button_at(5, 0).is_none());
        assert!(keypad.get_button_at(0, 4).is_none());
    }

    #[test]
    fn test_every_digit_has_a_button() {
        let keypad = Keypad::new();
        for c in "0123456789.".chars() {
            assert!(keypad.find_button(CalcKey::Digit(c)).is_some(), "missing {c}");
        }
        for op in Operation::ALL {
            assert!(keypad.find_button(CalcKey::Operator(op)).is_some());
        }
    }

    // ===== Highlight tests =====

    #[test]
    fn test_highlight_releases_others() {
        let mut keypad = Keypad::new();
        keypad.highlight(CalcKey::Digit('7'));
        keypad.highlight(CalcKey::Equals);
        assert_eq!(keypad.buttons().filter(|b| b.pressed).count(), 1);
        assert_eq!(keypad.pressed().unwrap().key, CalcKey::Equals);

        keypad.release_all();
        assert!(keypad.pressed().is_none());
    }

    // ===== Hit test =====

    #[test]
    fn test_hit_test() {
        let keypad = Keypad::new();
        // 4 columns of 6, 5 rows of 2 inside the border
        let area = Rect::new(10, 5, 26, 12);

        let hit = |x, y| keypad.hit_test(area, x, y).map(|i| keypad.buttons[i].key);
        assert_eq!(hit(11, 6), Some(CalcKey::Clear));
        assert_eq!(hit(30, 6), Some(CalcKey::Operator(Operation::Divide)));
        assert_eq!(hit(11, 8), Some(CalcKey::Digit('7')));
        assert_eq!(hit(17, 14), Some(CalcKey::Digit('0')));
        assert_eq!(hit(30, 15), Some(CalcKey::Equals));
    }

    #[test]
    fn test_hit_test_outside() {
        let keypad = Keypad::new();
        let area = Rect::new(10, 5, 26, 12);
        assert_eq!(keypad.hit_test(area, 10, 6), None); // border
        assert_eq!(keypad.hit_test(area, 0, 0), None);
        assert_eq!(keypad.hit_test(area, 40, 20), None);
    }

    // ===== Widget tests =====

    #[test]
    fn test_widget_render() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 30, 12);
        let mut buf = Buffer::empty(area);
        KeypadWidget::new(&keypad).render(area, &mut buf);

        let content = buf_to_string(&buf);
        assert!(content.contains("[7]"));
        assert!(content.contains("[÷]"));
        assert!(content.contains("[+/−]"));
        assert!(content.contains("[=]"));
    }

    #[test]
    fn test_widget_render_small() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 5, 5);
        let mut buf = Buffer::empty(area);
        KeypadWidget::new(&keypad).render(area, &mut buf);
        assert!(!buf_to_string(&buf).contains("[7]"));
    }

    #[test]
    fn test_widget_render_pressed_style() {
        let mut keypad = Keypad::new();
        keypad.highlight(CalcKey::Digit('7'));
        let area = Rect::new(0, 0, 30, 12);
        let mut buf = Buffer::empty(area);
        KeypadWidget::new(&keypad).render(area, &mut buf);

        let seven = buf
            .content()
            .iter()
            .position(|c| c.symbol() == "7")
            .unwrap();
        assert_eq!(buf.content()[seven].bg, Color::Yellow);
    }
}
