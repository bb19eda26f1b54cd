use leptos::*;

const SUPPORT_SITE: &str = "https://freedomcodecompliance.com";

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-md mx-auto px-4 sm:px-6">
                <div class="flex justify-center items-center h-16">
                    <h1 class="text-xl font-semibold text-fg">"Freedom Code Compliance"</h1>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-6 text-center text-xs text-fg-muted">
            <a href=SUPPORT_SITE class="hover:text-fg" target="_blank" rel="noopener noreferrer">
                "freedomcodecompliance.com"
            </a>
        </footer>
    }
}

/// Branded single-card page frame shared by every screen.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col bg-surface">
            <Header/>
            <main class="flex-1 flex items-center justify-center py-12 px-4 sm:px-6 lg:px-8">
                <div class="max-w-md w-full bg-surface-elevated shadow rounded-lg p-8">
                    {children()}
                </div>
            </main>
            <Footer/>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}
