//! Button component for the web UI.
//!
//! A [`Button`] renders as an `<a>` once it has an href and as a `<button>`
//! otherwise. Absolute `http(s)` links leave the site (stories live on
//! lankan.org), so they open in a new tab.

use maud::{html, Markup, Render};

/// Button style variants matching CSS classes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Solid accent button
    #[default]
    Primary,
    /// Bordered button on light backgrounds
    Outline,
    /// Translucent button for use over imagery
    Ghost,
    /// Inline text link
    Link,
}

impl ButtonVariant {
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Primary => "btn btn-primary",
            Self::Outline => "btn btn-outline",
            Self::Ghost => "btn btn-ghost",
            Self::Link => "btn-link",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target<'a> {
    Link(&'a str),
    Button { submit: bool },
}

/// A button or button-styled link.
///
/// ```ignore
/// Button::ghost("Explore the map").href("/attractions");
/// Button::link("Read more").href(&post.link).arrow();
/// Button::primary("Send message").submit().arrow();
/// ```
#[derive(Debug, Clone)]
pub struct Button<'a> {
    label: &'a str,
    variant: ButtonVariant,
    target: Target<'a>,
    arrow: bool,
}

impl<'a> Button<'a> {
    #[must_use]
    pub fn new(label: &'a str, variant: ButtonVariant) -> Self {
        Self {
            label,
            variant,
            target: Target::Button { submit: false },
            arrow: false,
        }
    }

    #[must_use]
    pub fn primary(label: &'a str) -> Self {
        Self::new(label, ButtonVariant::Primary)
    }

    #[must_use]
    pub fn outline(label: &'a str) -> Self {
        Self::new(label, ButtonVariant::Outline)
    }

    #[must_use]
    pub fn ghost(label: &'a str) -> Self {
        Self::new(label, ButtonVariant::Ghost)
    }

    #[must_use]
    pub fn link(label: &'a str) -> Self {
        Self::new(label, ButtonVariant::Link)
    }

    /// Render as a link to `href`.
    #[must_use]
    pub fn href(mut self, href: &'a str) -> Self {
        self.target = Target::Link(href);
        self
    }

    /// Render as a form submit button.
    #[must_use]
    pub fn submit(mut self) -> Self {
        self.target = Target::Button { submit: true };
        self
    }

    /// Append a decorative arrow after the label.
    #[must_use]
    pub fn arrow(mut self) -> Self {
        self.arrow = true;
        self
    }

    fn render_label(&self) -> Markup {
        html! {
            (self.label)
            @if self.arrow {
                " "
                span aria-hidden="true" { "\u{2192}" }
            }
        }
    }
}

/// Whether `href` points off-site.
fn is_external(href: &str) -> bool {
    href.starts_with("https://") || href.starts_with("http://")
}

impl Render for Button<'_> {
    fn render(&self) -> Markup {
        let class = self.variant.class();

        match self.target {
            Target::Link(href) => {
                let external = is_external(href);
                html! {
                    a class=(class)
                        href=(href)
                        target=[external.then_some("_blank")]
                        rel=[external.then_some("noopener noreferrer")] {
                        (self.render_label())
                    }
                }
            }
            Target::Button { submit } => html! {
                button class=(class) type=(if submit { "submit" } else { "button" }) {
                    (self.render_label())
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_button() {
        let html = Button::primary("Send").submit().render().into_string();
        assert_eq!(html, r#"<button class="btn btn-primary" type="submit">Send</button>"#);
    }

    #[test]
    fn test_plain_button_type() {
        let html = Button::outline("Toggle").render().into_string();
        assert_eq!(html, r#"<button class="btn btn-outline" type="button">Toggle</button>"#);
    }

    #[test]
    fn test_internal_link_stays_in_tab() {
        let html = Button::ghost("Explore").href("/attractions").render().into_string();
        assert_eq!(html, r#"<a class="btn btn-ghost" href="/attractions">Explore</a>"#);
    }

    #[test]
    fn test_external_link_opens_new_tab() {
        let html = Button::link("Read more")
            .href("https://lankan.org/a?x=1&y=2")
            .render()
            .into_string();

        assert!(html.contains(r#"href="https://lankan.org/a?x=1&amp;y=2""#));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
        assert!(html.contains(r#"class="btn-link""#));
    }

    #[test]
    fn test_arrow_is_decorative() {
        let html = Button::primary("Back to stories").href("/").arrow().render().into_string();
        assert_eq!(
            html,
            "<a class=\"btn btn-primary\" href=\"/\">Back to stories <span aria-hidden=\"true\">\u{2192}</span></a>"
        );
    }
}
