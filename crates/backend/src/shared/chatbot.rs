//! Canned support replies for the help widget.
//!
//! Rules are checked top to bottom against the lowercased message; the first
//! matching rule answers. Order matters: several later rules can never fire
//! because an earlier, broader keyword already matches.

pub const GREETING: &str = "Hello! How can I assist you today? You can ask about features, navigation, or troubleshooting.";

pub const FALLBACK: &str = "I'm sorry, I didn't understand that. Could you ask your question differently or specify the feature you're inquiring about?";

pub struct Rule {
    pub matches: fn(&str) -> bool,
    pub reply: &'static str,
}

fn any_of(input: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| input.contains(k))
}

fn all_of(input: &str, keywords: &[&str]) -> bool {
    keywords.iter().all(|k| input.contains(k))
}

pub static RULES: &[Rule] = &[
    // General
    Rule {
        matches: |s| any_of(s, &["salestrendz", "about"]),
        reply: "SalesTrendz is a platform designed to help businesses manage, analyze, and forecast their sales data with ease.",
    },
    Rule {
        matches: |s| s.contains("register"),
        reply: "To register, click on the \"Sign Up\" button on the homepage and fill out your details.",
    },
    Rule {
        matches: |s| s.contains("features"),
        reply: "SalesTrendz offers features like Sales Management, Analytics, and Forecasting. Would you like more details on any specific feature?",
    },
    Rule {
        matches: |s| all_of(s, &["reset", "password"]),
        reply: "To reset your password, click on \"Forgot Password\" on the login page and follow the instructions.",
    },
    Rule {
        matches: |s| any_of(s, &["free", "subscription"]),
        reply: "SalesTrendz offers both free and premium subscription plans. The premium plan includes advanced analytics and forecasting tools.",
    },
    Rule {
        matches: |s| any_of(s, &["secure", "data"]),
        reply: "Your data is secured with encryption and complies with industry standards for data protection.",
    },
    Rule {
        matches: |s| s.contains("mobile"),
        reply: "Yes, SalesTrendz is mobile-friendly and can be accessed on both iOS and Android devices via the browser.",
    },
    Rule {
        matches: |s| any_of(s, &["tutorial", "guide"]),
        reply: "We offer a step-by-step tutorial under the Help section. Visit the Tutorials page for more information.",
    },
    // Sales management
    Rule {
        matches: |s| any_of(s, &["upload", "sales data"]),
        reply: "To upload sales data, go to the Sales Management page and use the \"Upload Data\" button.",
    },
    Rule {
        matches: |s| s.contains("edit") || all_of(s, &["delete", "sales"]),
        reply: "Yes, you can edit or delete sales entries by navigating to the Sales Management page and selecting the respective record.",
    },
    Rule {
        matches: |s| any_of(s, &["filter", "data"]),
        reply: "To filter your sales data, use the filtering options by date, product, or region on the Sales Management page.",
    },
    Rule {
        matches: |s| any_of(s, &["download", "sales data"]),
        reply: "You can download your sales data in CSV or Excel format from the Sales Management page.",
    },
    Rule {
        matches: |s| s.contains("charts"),
        reply: "SalesTrendz supports bar charts, line graphs, and pie charts to visualize your sales trends.",
    },
    Rule {
        matches: |s| s.contains("multiple sales teams"),
        reply: "You can manage multiple sales teams by creating team profiles and assigning data access in the Settings.",
    },
    // Analytics
    Rule {
        matches: |s| s.contains("analytics"),
        reply: "Our analytics feature provides insights into sales performance, customer segmentation, and growth trends.",
    },
    Rule {
        matches: |s| s.contains("metrics"),
        reply: "You can track metrics like total revenue, profit margins, and regional sales performance.",
    },
    Rule {
        matches: |s| any_of(s, &["compare", "performance"]),
        reply: "To compare performance, use the Analytics page and select two time periods for side-by-side comparison.",
    },
    Rule {
        matches: |s| s.contains("sales growth"),
        reply: "Sales growth percentages represent the increase or decrease in revenue over a specific period. View detailed insights on the Analytics page.",
    },
    Rule {
        matches: |s| s.contains("customer segmentation"),
        reply: "Customer segmentation insights help identify key demographics and preferences of your customer base.",
    },
    // Forecasting
    Rule {
        matches: |s| any_of(s, &["forecast", "trends"]),
        reply: "Forecasting predicts future sales trends using historical data. Go to the Forecast page for predictions.",
    },
    Rule {
        matches: |s| any_of(s, &["inputs", "forecast"]),
        reply: "Forecasting requires inputs like sales history, seasonal data, and market trends.",
    },
    Rule {
        matches: |s| all_of(s, &["customize", "forecast"]),
        reply: "You can customize forecasting models in the Advanced Settings under the Forecast page.",
    },
    Rule {
        matches: |s| any_of(s, &["accurate", "forecast"]),
        reply: "Our forecasts are highly accurate, with a margin of error below 5%, depending on the quality of your data.",
    },
    Rule {
        matches: |s| s.contains("seasonality trends"),
        reply: "Yes, our forecasting tool includes seasonality trends to help you plan for high and low sales periods.",
    },
    // Account
    Rule {
        matches: |s| any_of(s, &["update", "profile"]),
        reply: "To update your profile, click on your username in the top-right corner and select \"Edit Profile.\"",
    },
    Rule {
        matches: |s| s.contains("not loading"),
        reply: "If the website is not loading, check your internet connection or try clearing your browser cache.",
    },
    Rule {
        matches: |s| s.contains("contact support"),
        reply: "You can contact our support team via the \"Help\" section or email us at support@salestrendz.com.",
    },
];

/// Reply to a user message, `None` for a blank one
pub fn respond(message: &str) -> Option<&'static str> {
    if message.trim().is_empty() {
        return None;
    }
    let input = message.to_lowercase();
    let reply = RULES
        .iter()
        .find(|rule| (rule.matches)(&input))
        .map(|rule| rule.reply)
        .unwrap_or(FALLBACK);
    Some(reply)
}
