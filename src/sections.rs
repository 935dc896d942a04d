use yew::prelude::*;

const SEPARATOR_GLYPHS: &str =
    "⊹❀⚘₊⊹✿❀₊⊹˚❀₊✿⊹⚘⊹˚‧❀⊹₊✿⚘⊹❀˚‧✿⊹❀‧₊⚘❀⊹✿₊⊹˚❀⊹₊❀⊹˚‧⚘⊹✿❀˚✿⊹❀₊⊹˚‧⚘✿❀˚⊹";

pub(crate) const CONTACT_EMAIL: &str = "cyn.cui@icloud.com";

/// External profiles listed in the contact line, in display order.
pub(crate) const PROFILE_LINKS: &[(&str, &str)] = &[
    ("Linkedin", "https://www.linkedin.com/in/tsuai"),
    ("Github", "https://github.com/cyncui"),
    ("Are.na", "https://www.are.na/cynthia"),
];

#[function_component(HeaderSection)]
pub(crate) fn header_section() -> Html {
    html! {
        <section class="section">
            <div class="section__stack">
                <h1 class="heading-large">{ "Cynthia Cui" }</h1>
                <p class="text-base">
                    { "Design Director @ Asian-Indigenous Relations Collective" }
                </p>
            </div>
        </section>
    }
}

#[function_component(AboutSection)]
pub(crate) fn about_section() -> Html {
    html! {
        <section>
            <p class="body-text text-gray">
                { "My work in goal-driven interactions and systems is rooted in HCI, and \
                   empathy. I create experiences that align user needs with strategic \
                   goals. I've also designed experiences in academia, SaaS, and \
                   community-building ₊⊹" }
            </p>
        </section>
    }
}

#[function_component(ContactSection)]
pub(crate) fn contact_section() -> Html {
    let profiles: Html = PROFILE_LINKS
        .iter()
        .map(|(label, href)| {
            html! {
                <>
                    <span class="text-muted">{ "⊹" }</span>
                    <a class="link" href={*href} target="_blank" rel="noopener noreferrer">
                        { *label }
                    </a>
                </>
            }
        })
        .collect();
    html! {
        <section class="section section--contact">
            <p class="body-text">
                { "Whether it's about my work, possible collaborations, or any \
                   design/art/tech links you might want to share, I'd love to hear from you \
                   (ʚ •ᴗ• ɞ)" }
            </p>
            <div class="contact-links">
                <a class="link" href={format!("mailto:{CONTACT_EMAIL}")}>{ CONTACT_EMAIL }</a>
                { profiles }
            </div>
        </section>
    }
}

#[function_component(DecorativeSeparator)]
pub(crate) fn decorative_separator() -> Html {
    html! {
        <div class="separator" aria-hidden="true">{ SEPARATOR_GLYPHS }</div>
    }
}

#[function_component(FooterSeparators)]
pub(crate) fn footer_separators() -> Html {
    html! {
        <div class="footer-separators">
            <DecorativeSeparator />
            <DecorativeSeparator />
        </div>
    }
}
