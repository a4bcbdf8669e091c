//! Home Page

use leptos::prelude::*;

use crate::components::NavLink;
use crate::route::Page;

const NAME: &str = "Joris Debien";
const HEADSHOT: &str = "/assets/headshot.svg";
const LINKEDIN_URL: &str = "https://www.linkedin.com/in/jorisdebien/";
const GITHUB_URL: &str = "https://github.com/JorisDebien/";

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="container">
            <div class="content">
                <div class="headshot-section">
                    <img src=HEADSHOT alt=NAME class="headshot" />
                </div>

                <h1 class="name">{NAME}</h1>

                <nav class="social-links">
                    <a href=LINKEDIN_URL target="_blank" rel="noopener noreferrer" aria-label="Visit LinkedIn">
                        <img src="/assets/linkedin-logo.svg" alt="LinkedIn" class="logo" />
                    </a>
                    <a href=GITHUB_URL target="_blank" rel="noopener noreferrer" aria-label="Visit GitHub">
                        <img src="/assets/github-logo.svg" alt="GitHub" class="logo" />
                    </a>
                </nav>

                <nav class="nav-links">
                    <NavLink to=Page::Career class="nav-button">"View Career"</NavLink>
                    <NavLink to=Page::Skills class="nav-button">"View Skills"</NavLink>
                </nav>
            </div>
        </main>
    }
}
