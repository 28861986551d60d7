//! Per-question assistant guidance table.
//!
//! One [`Guidance`] entry per defined question id, plus a declared
//! [`FALLBACK`] for ids the table doesn't know. Keeping the copy in a flat
//! table rather than scattered across conditionals makes every entry
//! independently testable and the fallback explicit.

/// Hand-authored assistant guidance for one question.
#[derive(Debug)]
pub struct Guidance {
    /// One-line situation description folded into the system prompt.
    pub context: &'static str,
    /// Topics the assistant should help with.
    pub help_with: &'static [&'static str],
    /// Example answers showing the expected register.
    pub examples: &'static [&'static str],
    /// Greeting shown when the chat widget opens on this question.
    pub greeting: &'static str,
    /// Canned user questions offered as one-tap suggestions.
    pub suggestions: &'static [&'static str],
}

/// Guidance used for any question id not in the table.
pub static FALLBACK: Guidance = Guidance {
    context: "General questionnaire assistance. Provide helpful, contextual support based on the user's question about the BorderPass questionnaire process.",
    help_with: &[],
    examples: &[],
    greeting: "I'm here to help with any questions about this section of the BorderPass questionnaire.",
    suggestions: &["How does this help?", "Can I skip this?", "What happens next?"],
};

/// Look up the guidance entry for a question id.
pub fn guidance_for(id: &str) -> &'static Guidance {
    GUIDANCE
        .iter()
        .find(|(entry_id, _)| *entry_id == id)
        .map(|(_, guidance)| guidance)
        .unwrap_or(&FALLBACK)
}

/// Every question id with a dedicated guidance entry.
pub fn known_ids() -> impl Iterator<Item = &'static str> {
    GUIDANCE.iter().map(|(id, _)| *id)
}

static GUIDANCE: &[(&str, Guidance)] = &[
    (
        "welcome",
        Guidance {
            context: "User is on the welcome screen of the BorderPass questionnaire.",
            help_with: &[
                "Explaining what BorderPass is",
                "Setting expectations about the questionnaire",
                "Addressing any concerns about data privacy",
                "Encouraging them to start the journey",
            ],
            examples: &[
                "BorderPass is designed to create a personalized travel profile to enhance your travel experience",
                "The questionnaire takes about 5 minutes and helps us understand your travel patterns",
                "Your information is used solely to personalize your BorderPass experience",
            ],
            greeting: "Welcome to BorderPass! I'm here to help you through this questionnaire. Feel free to ask me anything about the process or any specific questions you encounter.",
            suggestions: &[
                "How long does this take?",
                "Is my data secure?",
                "What is BorderPass?",
            ],
        },
    ),
    (
        "full_name",
        Guidance {
            context: "User is entering their full legal name.",
            help_with: &[
                "Name formatting questions (hyphens, apostrophes, multiple names)",
                "Legal name vs. preferred name clarification",
                "Character limits or special characters",
                "Why legal name is required",
            ],
            examples: &[
                "Yes, hyphens and apostrophes are fine - use your name exactly as it appears on your passport",
                "Please use your legal name as it appears on official documents for accurate travel processing",
                "If you have multiple middle names, include them all as they appear on your ID",
            ],
            greeting: "I'm here to help with your name entry. Ask me about formatting, special characters, or why we need your legal name.",
            suggestions: &[
                "What if my name has hyphens?",
                "Should I include middle names?",
                "Why do you need my legal name?",
            ],
        },
    ),
    (
        "email",
        Guidance {
            context: "User is entering their email address.",
            help_with: &[
                "Why email is collected",
                "Email privacy and security",
                "What communications they'll receive",
                "Email format requirements",
            ],
            examples: &[
                "Your email is used to send your personalized BorderPass profile and important travel updates",
                "We protect your privacy - your email won't be shared with third parties",
                "Make sure to use an email you check regularly for travel-related notifications",
            ],
            greeting: "Need help with the email section? I can explain why we collect this information and how it's used.",
            suggestions: &[
                "Why is my email needed?",
                "Will you send me spam?",
                "Can I change this later?",
            ],
        },
    ),
    (
        "travel_frequency",
        Guidance {
            context: "User is selecting how often they travel internationally.",
            help_with: &[
                "Clarifying what counts as \"international travel\"",
                "Helping them choose between similar options",
                "Explaining why this information is useful",
            ],
            examples: &[
                "International travel means crossing country borders - domestic flights don't count",
                "Choose the option that best represents your typical travel pattern over the past few years",
                "This helps us understand your travel experience level and customize recommendations",
            ],
            greeting: "I can help you determine your travel frequency. Ask me about what counts as international travel or which option fits your situation best.",
            suggestions: &[
                "What counts as international?",
                "What if I'm between categories?",
                "Does business travel count?",
            ],
        },
    ),
    (
        "primary_purpose",
        Guidance {
            context: "User is selecting their primary travel purpose.",
            help_with: &[
                "Distinguishing between different travel purposes",
                "What to choose if they have multiple purposes",
                "How this affects their BorderPass profile",
            ],
            examples: &[
                "Choose the purpose that represents the majority of your international trips",
                "If you travel equally for business and leisure, pick the one that's more important to you",
                "This helps us tailor travel tips and recommendations to your specific needs",
            ],
            greeting: "Wondering about your primary travel purpose? I can help you choose the right category or explain how this affects your profile.",
            suggestions: &[
                "What if I travel for multiple reasons?",
                "How does this affect my profile?",
                "Can I change this later?",
            ],
        },
    ),
    (
        "destinations",
        Guidance {
            context: "User is selecting regions they've visited recently.",
            help_with: &[
                "Geographic clarifications (which countries belong to which continents)",
                "Time frame questions (what counts as \"recent\")",
                "Whether to include transit stops",
            ],
            examples: &[
                "Recent means within the past 5 years - include any continent where you spent time, not just transit",
                "If you're unsure about a country's continent, include it if you think it might apply",
                "Transit stops under 24 hours typically don't count unless you left the airport",
            ],
            greeting: "Need help with regions and destinations? I can clarify geographic boundaries or what timeframe to consider.",
            suggestions: &[
                "Which countries are in which continent?",
                "Do layovers count?",
                "What timeframe should I consider?",
            ],
        },
    ),
    (
        "travel_experience_rating",
        Guidance {
            context: "User is rating their typical airport experience.",
            help_with: &[
                "What factors to consider in their rating",
                "How to average different experiences",
                "What each rating level means",
            ],
            examples: &[
                "Consider security wait times, customs efficiency, staff helpfulness, and overall stress level",
                "Think about your most common airport experiences, not just the best or worst ones",
                "1 = very poor/stressful, 3 = average, 5 = excellent/smooth experience",
            ],
            greeting: "I can help you think through your airport experience rating. Ask me what factors to consider or how to average different experiences.",
            suggestions: &[
                "What factors should I consider?",
                "How do I average different experiences?",
                "What does each rating mean?",
            ],
        },
    ),
    (
        "feedback",
        Guidance {
            context: "User is providing feedback about international travel.",
            help_with: &[
                "What kind of feedback is most valuable",
                "Encouraging honest, constructive input",
                "Suggesting areas they might comment on",
            ],
            examples: &[
                "Share any pain points, suggestions, or positive experiences that could help improve travel for everyone",
                "Think about customs, immigration, technology, accessibility, or any other aspect of international travel",
                "Your insights help shape better travel experiences - be as detailed or brief as you'd like",
            ],
            greeting: "Ready to share feedback? I can suggest areas to comment on or help you organize your thoughts about travel improvements.",
            suggestions: &[
                "What kind of feedback is helpful?",
                "Should I mention specific airports?",
                "Can I suggest improvements?",
            ],
        },
    ),
];
