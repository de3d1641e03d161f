// File: src/form.rs
// Purpose: The registration form controller: change handling and submission gating

use tracing::{debug, info, warn};

use crate::config::FormConfig;
use crate::error::{FormError, SubmitError};
use crate::field::Field;
use crate::notify::{Acknowledgment, Notifier};
use crate::rules::rule_for;
use crate::state::{FieldErrors, FieldState, FormValues, Presentation};

/// One field as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldView<'a> {
    pub field: Field,
    pub value: &'a str,
    pub presentation: Presentation<'a>,
}

/// State of one registration form for the lifetime of its mount.
///
/// Every event runs to completion on the caller's thread; the controller
/// exclusively owns its values and errors.
#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    values: FormValues,
    errors: FieldErrors,
    config: FormConfig,
}

impl RegisterForm {
    /// Create an empty form with every field untouched
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: FormConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Handle one edit of a single input: store the value, then validate that field.
    pub fn change(&mut self, field: Field, value: impl Into<String>) -> &FieldState {
        self.values.set(field, value.into());
        self.validate(field);

        if self.config.revalidate_confirmation {
            self.revalidate_dependents(field);
        }

        self.errors.get(field)
    }

    /// String-keyed entry point for hosts that only know the input's `name` attribute
    pub fn handle_change(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<&FieldState, FormError> {
        let field = name.parse::<Field>().map_err(|err| {
            warn!("Ignoring change for unknown field {:?}", name);
            err
        })?;

        Ok(self.change(field, value))
    }

    /// Run the field's rule against its current value and record the verdict
    fn validate(&mut self, field: Field) {
        let state = rule_for(field).check(self.values.get(field), &self.values);
        debug!(field = %field, state = state.tag(), "Validated field");
        self.errors.set(field, state);
    }

    /// Re-check fields whose rule reads `changed`, but only those already edited
    fn revalidate_dependents(&mut self, changed: Field) {
        for dependent in Field::ALL {
            if rule_for(dependent).depends_on() == Some(changed) && self.errors.is_touched(dependent)
            {
                self.validate(dependent);
            }
        }
    }

    /// Decide whether the form may be submitted. Does not modify the form.
    ///
    /// Required fields are checked in declared order and the first empty one
    /// is reported; later fields are not looked at.
    pub fn check_submission(&self) -> Acknowledgment {
        self.gate().into()
    }

    fn gate(&self) -> Result<(), SubmitError> {
        if let Some(missing) = Field::REQUIRED
            .into_iter()
            .find(|field| self.values.is_blank(*field))
        {
            return Err(SubmitError::MissingField(missing));
        }

        if self.config.reject_invalid_fields {
            let invalid = self.errors.invalid_fields();
            if !invalid.is_empty() {
                return Err(SubmitError::InvalidFields(invalid));
            }
        }

        Ok(())
    }

    /// Handle a submit event: gate the submission and acknowledge the outcome.
    ///
    /// Returns true when the form was accepted. Nothing is sent anywhere and the
    /// form stays editable either way.
    pub fn submit(&self, notifier: &mut impl Notifier) -> bool {
        let ack = self.check_submission();
        let accepted = ack.is_success();

        info!(accepted, outcome = %ack, "Form submission");
        notifier.notify(&ack);

        accepted
    }

    /// Current value of a field (`""` if never set)
    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn state(&self, field: Field) -> &FieldState {
        self.errors.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn presentation(&self, field: Field) -> Presentation<'_> {
        self.errors.get(field).presentation()
    }

    /// Every field in layout order, with what the renderer needs to draw it
    pub fn fields(&self) -> impl Iterator<Item = FieldView<'_>> {
        Field::ALL.into_iter().map(move |field| FieldView {
            field,
            value: self.value(field),
            presentation: self.presentation(field),
        })
    }

    /// Return to the freshly mounted state, keeping the configuration
    pub fn reset(&mut self) {
        self.values.clear();
        self.errors.clear();
        debug!("Form reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::RecordingNotifier;

    #[test]
    fn test_change_stores_and_validates() {
        let mut form = RegisterForm::new();
        let state = form.change(Field::Name, "Jo").clone();

        assert_eq!(form.value(Field::Name), "Jo");
        assert!(state.is_invalid());
        assert_eq!(form.state(Field::LastName), &FieldState::Untouched);
    }

    #[test]
    fn test_unknown_field_leaves_form_alone() {
        let mut form = RegisterForm::new();
        let err = form.handle_change("nickname", "x").unwrap_err();

        assert_eq!(err, FormError::UnknownField("nickname".to_string()));
        assert!(form.values().iter().next().is_none());
        assert!(form.errors().iter().next().is_none());
    }

    #[test]
    fn test_stale_confirmation_by_default() {
        let mut form = RegisterForm::new();
        form.change(Field::Password, "Abcdef1!");
        form.change(Field::RepeatPassword, "Abcdef1!");
        form.change(Field::Password, "Zyxwvu9@");

        assert_eq!(form.state(Field::RepeatPassword), &FieldState::Valid);
    }

    #[test]
    fn test_revalidates_confirmation_when_enabled() {
        let config = FormConfig {
            revalidate_confirmation: true,
            ..FormConfig::default()
        };
        let mut form = RegisterForm::with_config(config);
        form.change(Field::Password, "Abcdef1!");
        assert_eq!(form.state(Field::RepeatPassword), &FieldState::Untouched);

        form.change(Field::RepeatPassword, "Abcdef1!");
        form.change(Field::Password, "Zyxwvu9@");
        assert!(form.state(Field::RepeatPassword).is_invalid());

        form.change(Field::Password, "Abcdef1!");
        assert_eq!(form.state(Field::RepeatPassword), &FieldState::Valid);
    }

    #[test]
    fn test_submit_returns_plain_flag() {
        let form = RegisterForm::new();
        let mut notifier = RecordingNotifier::new();

        assert!(!form.submit(&mut notifier));
        assert_eq!(notifier.last(), Some("Please fill in the name field!"));
    }

    #[test]
    fn test_reset() {
        let mut form = RegisterForm::new();
        form.change(Field::Email, "a@b.co");
        form.reset();

        assert_eq!(form.value(Field::Email), "");
        assert_eq!(form.state(Field::Email), &FieldState::Untouched);
    }

    #[test]
    fn test_fields_in_layout_order() {
        let mut form = RegisterForm::new();
        form.change(Field::Phone, "555");

        let views: Vec<_> = form.fields().collect();
        assert_eq!(views.len(), 8);
        assert_eq!(views[0].field, Field::Name);
        assert_eq!(views[4].value, "555");
        assert_eq!(views[4].presentation, Presentation::Success);
        assert_eq!(views[7].presentation, Presentation::Neutral);
    }
}
