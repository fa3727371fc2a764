//! Contact form state. Lives only as long as the contact section is mounted.

use std::rc::Rc;

use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Service,
    Message,
}

impl Field {
    pub const REQUIRED: [Field; 4] = [Field::Name, Field::Email, Field::Service, Field::Message];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Service => "service",
            Field::Message => "message",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

pub enum FormAction {
    Set(Field, String),
    Reset,
}

impl FormState {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Service => &self.service,
            Field::Message => &self.message,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Service => &mut self.service,
            Field::Message => &mut self.message,
        }
    }

    /// Required fields that are still blank. The browser enforces these
    /// through `required`; this is only used for logging.
    pub fn missing_required(&self) -> Vec<Field> {
        Field::REQUIRED
            .into_iter()
            .filter(|f| self.get(*f).trim().is_empty())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            FormAction::Set(field, value) => {
                if self.get(field) == value {
                    return self;
                }
                let mut next = (*self).clone();
                *next.slot(field) = value;
                Rc::new(next)
            }
            FormAction::Reset => Rc::new(Self::default()),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    pub(crate) fn filled() -> Rc<FormState> {
        let mut state = Rc::new(FormState::default());
        for (field, value) in [
            (Field::Name, "Ngozi Eze"),
            (Field::Email, "ngozi@example.com"),
            (Field::Phone, "+234 803 000 0000"),
            (Field::Service, "Family Law"),
            (Field::Message, "I need advice on an estate matter."),
        ] {
            state = state.reduce(FormAction::Set(field, value.to_string()));
        }
        state
    }

    #[test]
    fn set_updates_only_the_named_field() {
        let state = Rc::new(FormState::default())
            .reduce(FormAction::Set(Field::Email, "a@b.co".into()));
        assert_eq!(state.email, "a@b.co");
        assert_eq!(state.name, "");
        assert_eq!(state.message, "");
    }

    #[test]
    fn reset_clears_every_field() {
        let state = filled().reduce(FormAction::Reset);
        assert!(state.is_empty());
        for field in [Field::Name, Field::Email, Field::Phone, Field::Service, Field::Message] {
            assert_eq!(state.get(field), "");
        }
    }

    #[test]
    fn phone_is_optional() {
        let state = filled().reduce(FormAction::Set(Field::Phone, String::new()));
        assert!(state.missing_required().is_empty());
    }

    #[test]
    fn blank_required_fields_are_reported() {
        let state = Rc::new(FormState::default())
            .reduce(FormAction::Set(Field::Name, "Ngozi".into()))
            .reduce(FormAction::Set(Field::Message, "   ".into()));
        assert_eq!(
            state.missing_required(),
            vec![Field::Email, Field::Service, Field::Message]
        );
    }
}
