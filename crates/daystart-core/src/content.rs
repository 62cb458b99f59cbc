//! Bundled daily content: quotes, fallback gradients, greeting text.

use chrono::NaiveDate;

use crate::daily::pick;

/// A motivational quote with attribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

pub const QUOTES: &[Quote] = &[
    Quote { text: "The only way to do great work is to love what you do.", author: "Steve Jobs" },
    Quote { text: "Innovation distinguishes between a leader and a follower.", author: "Steve Jobs" },
    Quote { text: "Life is what happens to you while you're busy making other plans.", author: "John Lennon" },
    Quote { text: "The future belongs to those who believe in the beauty of their dreams.", author: "Eleanor Roosevelt" },
    Quote { text: "It is during our darkest moments that we must focus to see the light.", author: "Aristotle" },
    Quote { text: "The way to get started is to quit talking and begin doing.", author: "Walt Disney" },
    Quote { text: "Don't let yesterday take up too much of today.", author: "Will Rogers" },
    Quote { text: "You learn more from failure than from success.", author: "Unknown" },
    Quote { text: "If you are working on something exciting that you really care about, you don't have to be pushed.", author: "Steve Jobs" },
    Quote { text: "Success is not final, failure is not fatal: it is the courage to continue that counts.", author: "Winston Churchill" },
    Quote { text: "The only impossible journey is the one you never begin.", author: "Tony Robbins" },
    Quote { text: "In the middle of difficulty lies opportunity.", author: "Albert Einstein" },
    Quote { text: "Believe you can and you're halfway there.", author: "Theodore Roosevelt" },
    Quote { text: "The only person you are destined to become is the person you decide to be.", author: "Ralph Waldo Emerson" },
    Quote { text: "Go confidently in the direction of your dreams. Live the life you have imagined.", author: "Henry David Thoreau" },
    Quote { text: "Everything you've ever wanted is on the other side of fear.", author: "George Addair" },
    Quote { text: "Dreams don't work unless you do.", author: "John C. Maxwell" },
    Quote { text: "The future starts today, not tomorrow.", author: "Pope John Paul II" },
    Quote { text: "Whether you think you can or you think you can't, you're right.", author: "Henry Ford" },
    Quote { text: "The only limit to our realization of tomorrow will be our doubts of today.", author: "Franklin D. Roosevelt" },
    Quote { text: "Do something today that your future self will thank you for.", author: "Sean Patrick Flanery" },
    Quote { text: "The best time to plant a tree was 20 years ago. The second best time is now.", author: "Chinese Proverb" },
    Quote { text: "Your limitation—it's only your imagination.", author: "Unknown" },
    Quote { text: "Push yourself, because no one else is going to do it for you.", author: "Unknown" },
    Quote { text: "Great things never come from comfort zones.", author: "Unknown" },
    Quote { text: "Dream it. Wish it. Do it.", author: "Unknown" },
    Quote { text: "Success doesn't just find you. You have to go out and get it.", author: "Unknown" },
    Quote { text: "The harder you work for something, the greater you'll feel when you achieve it.", author: "Unknown" },
    Quote { text: "Dream bigger. Do bigger.", author: "Unknown" },
    Quote { text: "Don't stop when you're tired. Stop when you're done.", author: "Unknown" },
];

/// Gradient stops for the local-fallback background rotation.
pub const GRADIENTS: &[&str] = &[
    "from-blue-400 to-purple-600",
    "from-green-400 to-blue-600",
    "from-purple-400 to-pink-600",
    "from-yellow-400 to-red-600",
    "from-indigo-400 to-cyan-600",
    "from-purple-500 to-pink-500",
    "from-blue-500 to-teal-500",
    "from-green-500 to-blue-500",
    "from-yellow-500 to-red-500",
    "from-pink-500 to-rose-500",
    "from-indigo-500 to-purple-500",
    "from-teal-500 to-green-500",
];

/// Today's quote. Rotates at local midnight with the day ordinal.
pub fn daily_quote(date: NaiveDate) -> &'static Quote {
    pick(QUOTES, date).unwrap_or(&QUOTES[0])
}

/// Today's fallback gradient.
pub fn daily_gradient(date: NaiveDate) -> &'static str {
    pick(GRADIENTS, date).copied().unwrap_or(GRADIENTS[0])
}

/// Greeting for a wall-clock hour (0-23).
pub fn greeting_for_hour(hour: u32) -> &'static str {
    match hour {
        5..=11 => "Good morning",
        12..=17 => "Good afternoon",
        _ => "Good evening",
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn quote_rotation_is_daily_and_stable() {
        let d = date(2026, 2, 12);
        assert_eq!(daily_quote(d), daily_quote(d));
        // Ordinal 42 % 30 == 12
        assert_eq!(daily_quote(d), &QUOTES[12]);
    }

    #[test]
    fn gradient_rotation_wraps() {
        // Ordinal 12 wraps back to the first gradient
        assert_eq!(daily_gradient(date(2026, 1, 13)), GRADIENTS[0]);
    }

    #[test]
    fn greeting_hour_boundaries() {
        assert_eq!(greeting_for_hour(4), "Good evening");
        assert_eq!(greeting_for_hour(5), "Good morning");
        assert_eq!(greeting_for_hour(11), "Good morning");
        assert_eq!(greeting_for_hour(12), "Good afternoon");
        assert_eq!(greeting_for_hour(17), "Good afternoon");
        assert_eq!(greeting_for_hour(18), "Good evening");
        assert_eq!(greeting_for_hour(23), "Good evening");
    }
}
