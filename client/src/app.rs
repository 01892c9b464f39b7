//! Root application component with routing and page-wide styles.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Style, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::activity_card::ACTIVITY_CARD_STYLES;
use crate::pages::activities::ActivitiesPage;

/// Layout and banner styles shared by every page.
const PAGE_STYLES: &str = r"
body {
  font-family: Arial, sans-serif;
  margin: 0;
  padding: 20px;
  color: #333;
  background-color: #f5f5f5;
}
.activities-page main {
  display: flex;
  flex-wrap: wrap;
  gap: 30px;
}
#activities-container,
#signup-container {
  flex: 1;
  min-width: 300px;
  background-color: white;
  padding: 20px;
  border-radius: 5px;
  box-shadow: 0 2px 5px rgba(0, 0, 0, 0.1);
}
.activity-card {
  margin-bottom: 15px;
  padding: 15px;
  border: 1px solid #ddd;
  border-radius: 5px;
  background-color: #f9f9f9;
}
.form-group {
  margin-bottom: 15px;
}
.form-group label {
  display: block;
  margin-bottom: 5px;
  font-weight: bold;
}
.form-group input,
.form-group select {
  width: 100%;
  padding: 8px;
  border: 1px solid #ddd;
  border-radius: 4px;
}
#message {
  margin-top: 20px;
  padding: 10px;
  border-radius: 4px;
}
.success {
  background-color: #e8f5e9;
  color: #2e7d32;
  border: 1px solid #a5d6a7;
}
.error {
  background-color: #ffebee;
  color: #c62828;
  border: 1px solid #ef9a9a;
}
.hidden {
  display: none;
}
";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Injects the page and card stylesheets once and routes `/` to the
/// activities page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Style id="activities-page">{PAGE_STYLES}</Style>
        <Style id="activity-cards">{ACTIVITY_CARD_STYLES}</Style>
        <Title text="Extracurricular Activities"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ActivitiesPage/>
            </Routes>
        </Router>
    }
}
