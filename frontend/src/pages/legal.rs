use chrono::NaiveDate;
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

fn last_updated() -> String {
    NaiveDate::from_ymd_opt(2026, 3, 1)
        .map(|date| format!("Last updated: {}", date.format("%B %-d, %Y")))
        .unwrap_or_default()
}

#[derive(Properties, PartialEq)]
struct LegalPageProps {
    title: AttrValue,
    children: Children,
}

#[function_component(LegalPage)]
fn legal_page(props: &LegalPageProps) -> Html {
    use_title(format!("{} | Brightforge Studio", props.title));

    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="legal-content">
            <style>{LEGAL_CSS}</style>
            <div>
                <h1>{props.title.clone()}</h1>
                <p class="last-updated">{last_updated()}</p>
                { for props.children.iter() }
                <div class="legal-links">
                    <Link<Route> to={Route::Terms}>{"Terms of Service"}</Link<Route>>
                    {" | "}
                    <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
                    {" | "}
                    <Link<Route> to={Route::Home}>{"Home"}</Link<Route>>
                </div>
            </div>
        </div>
    }
}

#[function_component(TermsOfService)]
pub fn terms_of_service() -> Html {
    html! {
        <LegalPage title="Terms of Service">
            <section>
                <h2>{"1. Who We Are"}</h2>
                <p>{"Brightforge Studio (\"we\", \"us\") designs and builds websites, mobile applications and marketing campaigns for businesses. These terms cover your use of this website."}</p>
            </section>

            <section>
                <h2>{"2. Use of This Website"}</h2>
                <ul>
                    <li>{"You may browse and share the content of this site for non-commercial purposes"}</li>
                    <li>{"You may not copy our portfolio images or case studies without permission"}</li>
                    <li>{"You agree not to misuse the contact form or submit unlawful content"}</li>
                </ul>
            </section>

            <section>
                <h2>{"3. Project Engagements"}</h2>
                <p>{"Inquiries sent through this site are not binding. Any project work is governed by a separate written agreement covering scope, timeline, fees and ownership of deliverables."}</p>
            </section>

            <section>
                <h2>{"4. Intellectual Property"}</h2>
                <p>{"Site content, logos and designs are owned by Brightforge Studio or shown with our clients' permission. Client trademarks remain the property of their owners."}</p>
            </section>

            <section>
                <h2>{"5. Limitation of Liability"}</h2>
                <p>{"This site is provided as is. We work to keep it accurate and available but make no guarantee that it is free of errors or interruptions."}</p>
            </section>

            <section>
                <h2>{"6. Contact"}</h2>
                <p>{format!("Questions about these terms: {}", config::CONTACT_EMAIL)}</p>
            </section>
        </LegalPage>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <LegalPage title="Privacy Policy">
            <section>
                <h2>{"1. Data We Collect"}</h2>
                <p>{"When you use the contact form we receive:"}</p>
                <ul>
                    <li>{"Your name and email address (to reply to you)"}</li>
                    <li>{"Your phone number, if you choose to give it"}</li>
                    <li>{"The subject and message you write"}</li>
                </ul>
                <p>{"We also collect anonymous usage statistics such as page views and errors to keep the site working well."}</p>
            </section>

            <section>
                <h2>{"2. How We Use It"}</h2>
                <ul>
                    <li>{"Answering your inquiry and preparing proposals"}</li>
                    <li>{"Improving the content and performance of this site"}</li>
                </ul>
                <p>{"We never sell your data or use it for unrelated marketing."}</p>
            </section>

            <section>
                <h2>{"3. Processors"}</h2>
                <p>{"Form submissions are relayed to our inbox by a third-party form service. Analytics are processed in aggregate."}</p>
            </section>

            <section>
                <h2>{"4. Storage and Retention"}</h2>
                <p>{"This site stores nothing in your browser beyond what is needed to render it. Inquiries are kept for up to two years, or until you ask us to delete them."}</p>
            </section>

            <section>
                <h2>{"5. Your Rights"}</h2>
                <p>{"You have the right to:"}</p>
                <ul>
                    <li>{"Access the personal data we hold about you"}</li>
                    <li>{"Ask us to correct or delete it"}</li>
                    <li>{"Object to processing or withdraw consent"}</li>
                </ul>
            </section>

            <section>
                <h2>{"6. Contact"}</h2>
                <p>{format!("For privacy requests, email {}", config::CONTACT_EMAIL)}</p>
            </section>
        </LegalPage>
    }
}

pub const LEGAL_CSS: &str = r#"
.legal-content {
    min-height: 100vh;
    background: #1a1a1a;
    padding: 8rem 2rem 4rem;
    text-align: center;
    color: #fff;
    display: flex;
    flex-direction: column;
    align-items: center;
}

.legal-content > div {
    background: rgba(30, 30, 30, 0.7);
    border: 1px solid rgba(30, 144, 255, 0.1);
    border-radius: 16px;
    padding: 3rem;
    max-width: 800px;
    margin: 0 auto;
    backdrop-filter: blur(10px);
    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.3);
}

.legal-content h1 {
    font-size: 2rem;
    background: linear-gradient(45deg, #fff, #7EB2FF);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
    margin-bottom: 1rem;
}

.legal-content .last-updated {
    color: #666;
    font-size: 0.9rem;
    margin-bottom: 2rem;
}

.legal-content section {
    background: rgba(0, 0, 0, 0.2);
    border-radius: 12px;
    width: 100%;
    max-width: 600px;
    padding: 2rem;
    margin: 1.5rem auto;
    text-align: left;
}

.legal-content h2 {
    color: #7EB2FF;
    font-size: 1.5rem;
    margin-bottom: 1.5rem;
}

.legal-content p, .legal-content li {
    color: #999;
    line-height: 1.6;
    margin-bottom: 1rem;
}

.legal-content ul {
    list-style-type: none;
    padding-left: 1.5rem;
}

.legal-content li {
    position: relative;
    margin-bottom: 0.5rem;
}

.legal-content li:before {
    content: "•";
    color: #1E90FF;
    position: absolute;
    left: -1.5rem;
}

.legal-links {
    margin-top: 2rem;
    text-align: center;
}

.legal-links a {
    color: #1E90FF;
    text-decoration: none;
    transition: color 0.3s ease;
}

.legal-links a:hover {
    color: #7EB2FF;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_updated_is_human_readable() {
        assert_eq!(last_updated(), "Last updated: March 1, 2026");
    }
}
