use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::motion::hooks::use_reveal_group;
use crate::motion::reveal::{AnimationKind, RevealOptions};
use crate::Route;

struct Member {
    name: &'static str,
    role: &'static str,
    bio: &'static str,
    initials: &'static str,
}

const MEMBERS: &[Member] = &[
    Member { name: "Elena Novak", role: "Founder & Creative Director", bio: "Fifteen years of brand and product design. Still sketches every project on paper first.", initials: "EN" },
    Member { name: "Marcus Reed", role: "Lead Engineer", bio: "Builds the web and mobile backbones. Happiest when a page loads in under a second.", initials: "MR" },
    Member { name: "Aiko Tanaka", role: "UX Researcher", bio: "Runs the interviews and usability tests that keep our designs honest.", initials: "AT" },
    Member { name: "Daniel Osei", role: "Marketing Strategist", bio: "Turns launches into campaigns and campaigns into numbers you can act on.", initials: "DO" },
    Member { name: "Sofia Marin", role: "Project Manager", bio: "Keeps timelines real and clients informed. Owner of the weekly demo.", initials: "SM" },
    Member { name: "Liam Carter", role: "Mobile Developer", bio: "Ships iOS and Android apps that feel at home on both platforms.", initials: "LC" },
];

#[function_component(Team)]
pub fn team() -> Html {
    use_title("Our Team | Brightforge Studio".to_string());
    let grid = use_node_ref();
    use_reveal_group(grid.clone(), 100, RevealOptions::animated(AnimationKind::FadeUp));

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
        <div class="team-page">
            <style>
                {r#"
                    .team-page {
                        min-height: 100vh;
                        background: #1a1a1a;
                        color: #fff;
                        padding: 8rem 2rem 4rem;
                    }
                    .team-page h1 {
                        text-align: center;
                        font-size: 2.5rem;
                        background: linear-gradient(45deg, #fff, #7EB2FF);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .team-page > p {
                        text-align: center;
                        color: #999;
                        max-width: 640px;
                        margin: 0 auto 3rem;
                    }
                    .team-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                        gap: 2rem;
                        max-width: 1100px;
                        margin: 0 auto;
                    }
                    .member {
                        background: rgba(30, 30, 30, 0.7);
                        border: 1px solid rgba(30, 144, 255, 0.1);
                        border-radius: 16px;
                        padding: 2rem;
                        text-align: center;
                        opacity: 0;
                    }
                    .member.revealed {
                        animation: memberIn 0.6s ease forwards;
                    }
                    @keyframes memberIn {
                        from { opacity: 0; transform: translateY(24px); }
                        to { opacity: 1; transform: none; }
                    }
                    .avatar {
                        width: 96px;
                        height: 96px;
                        border-radius: 50%;
                        margin: 0 auto 1rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.8rem;
                        font-weight: bold;
                        background: linear-gradient(45deg, #1E90FF, #7EB2FF);
                    }
                    .member h3 { margin-bottom: 0.3rem; }
                    .member .role { color: #7EB2FF; font-size: 0.9rem; }
                    .member p { color: #999; line-height: 1.6; }
                    .team-cta { text-align: center; margin-top: 3rem; }
                    .team-cta a { color: #7EB2FF; }
                "#}
            </style>
            <h1>{"Meet the Team"}</h1>
            <p>{"Six people, one room, no hand-offs to strangers. The people you meet on the first call are the people who build your project."}</p>
            <div ref={grid} class="team-grid">
                {
                    MEMBERS.iter().map(|member| html! {
                        <div class="member reveal-item" key={member.name}>
                            <div class="avatar">{member.initials}</div>
                            <h3>{member.name}</h3>
                            <span class="role">{member.role}</span>
                            <p>{member.bio}</p>
                        </div>
                    }).collect::<Html>()
                }
            </div>
            <div class="team-cta">
                <a href="/#contact">{"Work with us →"}</a>
                {" | "}
                <Link<Route> to={Route::Home}>{"Back to home"}</Link<Route>>
            </div>
        </div>
    }
}
