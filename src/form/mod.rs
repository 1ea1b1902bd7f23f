//! User-management form controller as a DOM-free state machine.
//!
//! One instance per page load owns all form state: visibility, field
//! values, the password-confirmation error, and the masked/plain toggle.

pub const MISMATCH_MESSAGE: &str = "La contraseña y su confirmación no coinciden.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormVisibility {
    Hidden,
    Visible,
}

#[derive(Debug)]
pub struct UserForm {
    visibility: FormVisibility,
    show_button_enabled: bool,
    identificacion: String,
    usuario: String,
    password: String,
    repeat_password: String,
    estado: String,
    error_message: String,
    repeat_highlighted: bool,
    passwords_masked: bool,
}

impl Default for UserForm {
    fn default() -> Self {
        Self::new()
    }
}

impl UserForm {
    pub fn new() -> Self {
        Self {
            visibility: FormVisibility::Hidden,
            show_button_enabled: true,
            identificacion: String::new(),
            usuario: String::new(),
            password: String::new(),
            repeat_password: String::new(),
            estado: String::new(),
            error_message: String::new(),
            repeat_highlighted: false,
            passwords_masked: true,
        }
    }

    /// Opens the form and disables the show button so repeated clicks
    /// cannot re-trigger it.
    pub fn show(&mut self) {
        self.visibility = FormVisibility::Visible;
        self.show_button_enabled = false;
    }

    /// Hides the form, re-enables the show button, and clears both
    /// password fields along with any error state.
    pub fn close(&mut self) {
        self.visibility = FormVisibility::Hidden;
        self.show_button_enabled = true;
        self.password.clear();
        self.repeat_password.clear();
        self.clear_errors();
    }

    pub fn set_usuario(&mut self, value: &str) {
        self.usuario = value.to_string();
    }

    /// Updates the password field and re-validates, mirroring the script's
    /// per-keystroke validation.
    pub fn set_password(&mut self, value: &str) {
        self.password = value.to_string();
        self.validate_passwords();
    }

    pub fn set_repeat_password(&mut self, value: &str) {
        self.repeat_password = value.to_string();
        self.validate_passwords();
    }

    /// Flips both password inputs between masked and plain text.
    pub fn toggle_password_visibility(&mut self) {
        self.passwords_masked = !self.passwords_masked;
    }

    /// Copies a clicked table row into the form fields: the password cell
    /// fills both password inputs for the edit-in-place flow. Rows with
    /// fewer than four cells are ignored.
    pub fn populate_from_row(&mut self, cells: &[&str]) {
        if cells.len() < 4 {
            return;
        }

        self.identificacion = cells[0].trim().to_string();
        self.usuario = cells[1].trim().to_string();
        self.password = cells[2].trim().to_string();
        self.repeat_password = cells[2].trim().to_string();
        self.estado = cells[3].trim().to_string();
        self.validate_passwords();
    }

    fn validate_passwords(&mut self) {
        if self.repeat_password.is_empty() {
            self.clear_errors();
        } else if self.password != self.repeat_password {
            self.error_message = MISMATCH_MESSAGE.to_string();
            self.repeat_highlighted = true;
        } else {
            self.clear_errors();
        }
    }

    fn clear_errors(&mut self) {
        self.error_message.clear();
        self.repeat_highlighted = false;
    }

    pub fn visibility(&self) -> FormVisibility {
        self.visibility
    }

    pub fn show_button_enabled(&self) -> bool {
        self.show_button_enabled
    }

    pub fn identificacion(&self) -> &str {
        &self.identificacion
    }

    pub fn usuario(&self) -> &str {
        &self.usuario
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn repeat_password(&self) -> &str {
        &self.repeat_password
    }

    pub fn estado(&self) -> &str {
        &self.estado
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn repeat_highlighted(&self) -> bool {
        self.repeat_highlighted
    }

    pub fn passwords_masked(&self) -> bool {
        self.passwords_masked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_and_close_cycle() {
        let mut form = UserForm::new();
        assert_eq!(form.visibility(), FormVisibility::Hidden);
        assert!(form.show_button_enabled());

        form.show();
        assert_eq!(form.visibility(), FormVisibility::Visible);
        assert!(!form.show_button_enabled());

        form.set_password("secret1");
        form.set_repeat_password("secret2");
        form.close();

        assert_eq!(form.visibility(), FormVisibility::Hidden);
        assert!(form.show_button_enabled());
        assert_eq!(form.password(), "");
        assert_eq!(form.repeat_password(), "");
        assert_eq!(form.error_message(), "");
        assert!(!form.repeat_highlighted());
    }

    #[test]
    fn test_mismatch_sets_message_and_highlight() {
        let mut form = UserForm::new();
        form.set_password("abc");
        form.set_repeat_password("abd");

        assert_eq!(form.error_message(), MISMATCH_MESSAGE);
        assert!(form.repeat_highlighted());
    }

    #[test]
    fn test_clearing_confirmation_clears_both() {
        let mut form = UserForm::new();
        form.set_password("abc");
        form.set_repeat_password("abd");
        assert!(form.repeat_highlighted());

        form.set_repeat_password("");
        assert_eq!(form.error_message(), "");
        assert!(!form.repeat_highlighted());
    }

    #[test]
    fn test_matching_passwords_clear_error() {
        let mut form = UserForm::new();
        form.set_password("abc");
        form.set_repeat_password("abd");
        form.set_repeat_password("abc");

        assert_eq!(form.error_message(), "");
        assert!(!form.repeat_highlighted());
    }

    #[test]
    fn test_toggle_password_visibility() {
        let mut form = UserForm::new();
        assert!(form.passwords_masked());
        form.toggle_password_visibility();
        assert!(!form.passwords_masked());
        form.toggle_password_visibility();
        assert!(form.passwords_masked());
    }

    #[test]
    fn test_populate_from_row() {
        let mut form = UserForm::new();
        form.populate_from_row(&["42", "ana", "$2b$10$abcdef", "activo"]);

        assert_eq!(form.identificacion(), "42");
        assert_eq!(form.usuario(), "ana");
        assert_eq!(form.password(), "$2b$10$abcdef");
        assert_eq!(form.repeat_password(), "$2b$10$abcdef");
        assert_eq!(form.estado(), "activo");
        // Both password fields hold the same value, so no mismatch error
        assert_eq!(form.error_message(), "");
    }

    #[test]
    fn test_populate_from_short_row_is_noop() {
        let mut form = UserForm::new();
        form.populate_from_row(&["42", "ana"]);

        assert_eq!(form.identificacion(), "");
        assert_eq!(form.usuario(), "");
    }

    #[test]
    fn test_populate_trims_cell_whitespace() {
        let mut form = UserForm::new();
        form.populate_from_row(&[" 42 ", " ana ", " hash ", " activo "]);

        assert_eq!(form.identificacion(), "42");
        assert_eq!(form.usuario(), "ana");
        assert_eq!(form.estado(), "activo");
    }
}
