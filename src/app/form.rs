//! Sign-up form state. Field values live only as long as the form; nothing
//! is validated or stored.

use unicode_width::UnicodeWidthStr;

#[derive(Debug, Default)]
pub struct TextInput {
    pub text: String,
    /// Byte offset into `text`, always on a char boundary.
    pub cursor: usize,
}

impl TextInput {
    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Display columns before the cursor.
    pub fn cursor_column(&self) -> usize {
        self.text[..self.cursor].width()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Username,
    Email,
    Password,
    ConfirmPassword,
}

impl FieldKind {
    pub const ALL: [FieldKind; 4] = [
        FieldKind::Username,
        FieldKind::Email,
        FieldKind::Password,
        FieldKind::ConfirmPassword,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FieldKind::Username => "Username",
            FieldKind::Email => "Email",
            FieldKind::Password => "Password",
            FieldKind::ConfirmPassword => "Confirm password",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FieldKind::Username => "Choose a username",
            FieldKind::Email => "Enter your email address",
            FieldKind::Password => "Create a password",
            FieldKind::ConfirmPassword => "Repeat your password",
        }
    }

    pub fn is_secret(self) -> bool {
        matches!(self, FieldKind::Password | FieldKind::ConfirmPassword)
    }
}

#[derive(Debug, Default)]
pub struct RegisterForm {
    fields: [TextInput; 4],
    focused: usize,
}

impl RegisterForm {
    pub fn focused(&self) -> FieldKind {
        FieldKind::ALL[self.focused]
    }

    pub fn is_last_focused(&self) -> bool {
        self.focused + 1 == FieldKind::ALL.len()
    }

    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % FieldKind::ALL.len();
    }

    pub fn focus_prev(&mut self) {
        self.focused = (self.focused + FieldKind::ALL.len() - 1) % FieldKind::ALL.len();
    }

    pub fn input(&self, kind: FieldKind) -> &TextInput {
        &self.fields[Self::slot(kind)]
    }

    pub fn focused_input_mut(&mut self) -> &mut TextInput {
        &mut self.fields[self.focused]
    }

    /// What the field shows: the text, or one bullet per char for secrets.
    pub fn display_value(&self, kind: FieldKind) -> String {
        let text = &self.input(kind).text;
        if kind.is_secret() {
            "•".repeat(text.chars().count())
        } else {
            text.clone()
        }
    }

    /// Cursor column for the focused field as rendered by `display_value`.
    pub fn display_cursor(&self) -> usize {
        let input = &self.fields[self.focused];
        if self.focused().is_secret() {
            input.text[..input.cursor].chars().count()
        } else {
            input.cursor_column()
        }
    }

    pub fn clear(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
        self.focused = 0;
    }

    fn slot(kind: FieldKind) -> usize {
        FieldKind::ALL.iter().position(|k| *k == kind).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(input: &mut TextInput, s: &str) {
        for c in s.chars() {
            input.insert_char(c);
        }
    }

    #[test]
    fn test_text_input_editing() {
        let mut input = TextInput::default();
        type_str(&mut input, "heló");
        input.move_left();
        input.delete_back();
        assert_eq!(input.text, "heó");
        input.move_home();
        input.delete_forward();
        assert_eq!(input.text, "eó");
        input.move_end();
        input.insert_char('!');
        assert_eq!(input.text, "eó!");
        assert_eq!(input.cursor_column(), 3);
    }

    #[test]
    fn test_focus_cycles() {
        let mut form = RegisterForm::default();
        assert_eq!(form.focused(), FieldKind::Username);
        form.focus_prev();
        assert_eq!(form.focused(), FieldKind::ConfirmPassword);
        assert!(form.is_last_focused());
        form.focus_next();
        assert_eq!(form.focused(), FieldKind::Username);
    }

    #[test]
    fn test_secret_fields_are_masked() {
        let mut form = RegisterForm::default();
        type_str(form.focused_input_mut(), "player1");
        form.focus_next();
        form.focus_next();
        type_str(form.focused_input_mut(), "hunter2");
        assert_eq!(form.display_value(FieldKind::Username), "player1");
        assert_eq!(form.display_value(FieldKind::Password), "•••••••");
        assert_eq!(form.input(FieldKind::Password).text, "hunter2");
        assert_eq!(form.display_cursor(), 7);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut form = RegisterForm::default();
        form.focus_next();
        type_str(form.focused_input_mut(), "a@b.c");
        form.clear();
        assert_eq!(form.focused(), FieldKind::Username);
        assert!(FieldKind::ALL.iter().all(|k| form.input(*k).text.is_empty()));
    }
}
