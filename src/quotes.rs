use rand::Rng;

pub const ARNOLD_QUOTES: [&str; 6] = [
    "GET TO THE CHOPPA! 🚁",
    "I'll be back... when the WiFi is fixed.",
    "Come with me if you want to connect.",
    "Hasta la vista, bad connection!",
    "It's not a tumor... it's your router!",
    "Consider this a divorce from your ISP.",
];

pub const ESCAPE_ROUTES: [&str; 6] = [
    "☕ Find a coffee shop with free WiFi",
    "📱 Enable mobile hotspot on your phone",
    "🔌 Switch to ethernet cable (old school!)",
    "🏢 Go to the library",
    "👨‍💻 Visit a coworking space",
    "🏠 Ask your neighbor for their WiFi password",
];

/// Uniform random pick; back-to-back repeats are fine.
pub fn random_quote() -> &'static str {
    ARNOLD_QUOTES[rand::thread_rng().gen_range(0..ARNOLD_QUOTES.len())]
}

pub fn random_escape_route() -> &'static str {
    ESCAPE_ROUTES[rand::thread_rng().gen_range(0..ESCAPE_ROUTES.len())]
}
