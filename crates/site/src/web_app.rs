use desktop_runtime::{DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

const DESKTOP_CSS: &str = include_str!("desktop.css");

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Windows 95" />
        <Style id="desktop-styles">{DESKTOP_CSS}</Style>
        <Meta name="description" content="A Windows 95 desktop in the browser, with a Snake game in the terminal." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DesktopEntry />
                    <Route path="/*any" view=MissingPage />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider>
            <DesktopShell />
        </DesktopProvider>
    }
}

#[component]
fn MissingPage() -> impl IntoView {
    let location = use_location();

    view! {
        <section class="missing-page" role="alertdialog">
            <h1>"Cannot find file"</h1>
            <p>{move || format!("Windows cannot find '{}'.", location.pathname.get())}</p>
            <A href="/">"Return to desktop"</A>
        </section>
    }
}
