//! Form components for maud templates.
//!
//! Forms on this site post to an external form service, so there is no
//! server-side validation to mirror: controls only carry the browser-level
//! constraints (`type`, `required`, `autocomplete`).

use maud::{html, Markup, Render};

/// A `<form>` posting already-rendered controls to an external action.
#[derive(Debug)]
pub struct Form<'a> {
    action: &'a str,
    content: Markup,
    class: Option<&'a str>,
    id: Option<&'a str>,
}

impl<'a> Form<'a> {
    /// A form posting `content` to `action`.
    #[must_use]
    pub fn post(action: &'a str, content: Markup) -> Self {
        Self {
            action,
            content,
            class: None,
            id: None,
        }
    }

    #[must_use]
    pub fn class(mut self, class: &'a str) -> Self {
        self.class = Some(class);
        self
    }

    #[must_use]
    pub fn id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }
}

impl Render for Form<'_> {
    fn render(&self) -> Markup {
        html! {
            form action=(self.action) method="post" class=[self.class] id=[self.id] {
                (self.content)
            }
        }
    }
}

/// The `type` of an [`Input`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Hidden,
}

impl InputKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Hidden => "hidden",
        }
    }
}

/// A single-line `<input>`.
#[derive(Debug, Clone)]
pub struct Input<'a> {
    name: &'a str,
    kind: InputKind,
    value: Option<&'a str>,
    placeholder: Option<&'a str>,
    autocomplete: Option<&'a str>,
    required: bool,
}

impl<'a> Input<'a> {
    #[must_use]
    pub fn new(name: &'a str, kind: InputKind) -> Self {
        Self {
            name,
            kind,
            value: None,
            placeholder: None,
            autocomplete: None,
            required: false,
        }
    }

    #[must_use]
    pub fn text(name: &'a str) -> Self {
        Self::new(name, InputKind::Text)
    }

    /// An email input; browsers autofill it from the user's address.
    #[must_use]
    pub fn email(name: &'a str) -> Self {
        Self {
            autocomplete: Some("email"),
            ..Self::new(name, InputKind::Email)
        }
    }

    /// A hidden field, e.g. a `_subject` line for the form service.
    #[must_use]
    pub fn hidden(name: &'a str, value: &'a str) -> Self {
        Self {
            value: Some(value),
            ..Self::new(name, InputKind::Hidden)
        }
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    #[must_use]
    pub fn autocomplete(mut self, autocomplete: &'a str) -> Self {
        self.autocomplete = Some(autocomplete);
        self
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn render_with_id(&self, id: Option<&str>) -> Markup {
        html! {
            input type=(self.kind.as_str())
                name=(self.name)
                id=[id]
                value=[self.value]
                placeholder=[self.placeholder]
                autocomplete=[self.autocomplete]
                required[self.required];
        }
    }
}

impl Render for Input<'_> {
    fn render(&self) -> Markup {
        self.render_with_id(None)
    }
}

/// A multi-line `<textarea>`.
#[derive(Debug, Clone)]
pub struct TextArea<'a> {
    name: &'a str,
    rows: u32,
    placeholder: Option<&'a str>,
    required: bool,
}

impl<'a> TextArea<'a> {
    const DEFAULT_ROWS: u32 = 4;

    #[must_use]
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            rows: Self::DEFAULT_ROWS,
            placeholder: None,
            required: false,
        }
    }

    #[must_use]
    pub fn rows(mut self, rows: u32) -> Self {
        self.rows = rows.max(1);
        self
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn render_with_id(&self, id: Option<&str>) -> Markup {
        html! {
            textarea name=(self.name)
                id=[id]
                rows=(self.rows)
                placeholder=[self.placeholder]
                required[self.required] {}
        }
    }
}

impl Render for TextArea<'_> {
    fn render(&self) -> Markup {
        self.render_with_id(None)
    }
}

/// The control inside a [`FormGroup`].
#[derive(Debug, Clone)]
pub enum Control<'a> {
    Input(Input<'a>),
    TextArea(TextArea<'a>),
}

impl<'a> From<Input<'a>> for Control<'a> {
    fn from(input: Input<'a>) -> Self {
        Self::Input(input)
    }
}

impl<'a> From<TextArea<'a>> for Control<'a> {
    fn from(textarea: TextArea<'a>) -> Self {
        Self::TextArea(textarea)
    }
}

/// A labelled control. The label's `for` and the control's `id` are both
/// set from `id`.
#[derive(Debug, Clone)]
pub struct FormGroup<'a> {
    label: &'a str,
    id: &'a str,
    control: Control<'a>,
}

impl<'a> FormGroup<'a> {
    #[must_use]
    pub fn new(label: &'a str, id: &'a str, control: impl Into<Control<'a>>) -> Self {
        Self {
            label,
            id,
            control: control.into(),
        }
    }
}

impl Render for FormGroup<'_> {
    fn render(&self) -> Markup {
        let control = match &self.control {
            Control::Input(input) => input.render_with_id(Some(self.id)),
            Control::TextArea(textarea) => textarea.render_with_id(Some(self.id)),
        };

        html! {
            div class="form-group" {
                label for=(self.id) { (self.label) }
                (control)
            }
        }
    }
}
