//! Contact page with a form posted to an external form service.

use maud::{html, Markup};

use crate::components::{BaseLayout, Button, Form, FormGroup, Input, OpenGraphMetadata, TextArea};

/// Render the contact page. The form posts straight to `form_action`.
#[must_use]
pub fn render_contact_page(form_action: &str) -> Markup {
    let fields = html! {
        (Input::hidden("_subject", "Srilankan.vacations enquiry"))
        (FormGroup::new(
            "Your email",
            "contact-email",
            Input::email("email").placeholder("you@example.com").required(),
        ))
        (FormGroup::new(
            "Your message",
            "contact-message",
            TextArea::new("message").rows(5).required(),
        ))
        div class="form-footer" {
            p class="muted" {
                "By sending, you agree we may respond to your email about your travel inquiry."
            }
            (Button::primary("Send message").submit().arrow())
        }
    };

    let content = html! {
        main class="container narrow page" {
            header class="page-header centered" {
                span class="eyebrow" { "Contact" }
                h1 { "Let's plan your Sri Lanka journey" }
                p class="lead" {
                    "Drop us a line with your travel questions - visas, routes, stays, or partnerships. "
                    "We reply within 1-2 business days."
                }
            }

            div class="panel" {
                div class="panel-header" {
                    h2 { "Send us a message" }
                    p class="muted" { "We use Formspree to securely collect your message." }
                }
                (Form::post(form_action, fields).class("contact-form").id("contact-form"))
            }
        }
    };

    BaseLayout::new("Contact Us", "/contact")
        .with_og_metadata(OpenGraphMetadata::new(
            "Contact Us",
            "Get in touch with Lankan Travel. Ask about itineraries, visas, or partnership opportunities.",
            "/contact",
        ))
        .render(content)
}
