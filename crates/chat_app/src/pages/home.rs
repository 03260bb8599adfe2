use crate::router::Route;

/// Landing page: static copy and the links out of it.
#[derive(Debug, Clone, Copy, Default)]
pub struct HomePage;

impl HomePage {
    pub const BRAND: &'static str = "PingBot";
    pub const HEADLINE: &'static str = "Just Ask Whatever You Want";
    pub const TAGLINE: &'static str = "Experience the next generation of AI-powered conversations. \
        Get instant, intelligent responses with memory that understands your context.";

    pub fn nav_links(&self) -> [(&'static str, Route); 3] {
        [
            ("Login", Route::Login),
            ("Get Started", Route::Register),
            ("Start Chatting", Route::Chat),
        ]
    }

    pub fn features(&self) -> [(&'static str, &'static str); 3] {
        [
            (
                "Instant Responses",
                "Lightning-fast AI responses powered by advanced models",
            ),
            (
                "Smart Memory",
                "Context-aware conversations that remember you",
            ),
            (
                "Secure & Private",
                "Your conversations are encrypted and protected",
            ),
        ]
    }
}
