//! Built-in sample history
//!
//! Used when the viewer runs with `--demo`, and as a realistic fixture in
//! tests: three Claude sessions over a main line, one commit without a
//! session, and a side branch. Each session comes with its transcript.

use crate::context::ConversationMap;
use crate::model::MessageRole::{Assistant, System, User};
use crate::model::{Commit, Conversation, ConversationContext, Message, MessageRole};

struct Sample {
    sha: &'static str,
    parent: Option<&'static str>,
    message: &'static str,
    timestamp: &'static str,
    branches: &'static [&'static str],
    context: Option<(&'static str, u32, bool)>,
}

const SAMPLES: &[Sample] = &[
    Sample {
        sha: "3f9a1c07d2e84b6fa0c51e9d7b2a4c8e6f1d0b93",
        parent: None,
        message: "Add user authentication system",
        timestamp: "2025-01-20T10:00:00Z",
        branches: &[],
        context: Some(("ctx-550e8400", 10, true)),
    },
    Sample {
        sha: "8b27e4d1c9f03a5e7d6b8c2f1a0e9d4c3b5a7f62",
        parent: Some("3f9a1c07d2e84b6fa0c51e9d7b2a4c8e6f1d0b93"),
        message: "Refactor auth middleware",
        timestamp: "2025-01-20T11:30:00Z",
        branches: &[],
        context: Some(("ctx-550e8400", 8, false)),
    },
    Sample {
        sha: "c41d7a9e2b6f8035d1e4c7a9b2f6e0d3a8c5b714",
        parent: Some("8b27e4d1c9f03a5e7d6b8c2f1a0e9d4c3b5a7f62"),
        message: "Add password reset flow",
        timestamp: "2025-01-20T14:00:00Z",
        branches: &[],
        context: Some(("ctx-550e8400", 5, false)),
    },
    Sample {
        sha: "5e0b3f8a7c2d9146e8b1a5d3c7f9e2a4b6d8c031",
        parent: Some("c41d7a9e2b6f8035d1e4c7a9b2f6e0d3a8c5b714"),
        message: "Send email notifications",
        timestamp: "2025-01-20T16:00:00Z",
        branches: &[],
        context: Some(("ctx-660e8400", 6, true)),
    },
    Sample {
        sha: "d93f1b5e8a2c7046b9d1e3f5a7c9b2e4d6f8a013",
        parent: Some("5e0b3f8a7c2d9146e8b1a5d3c7f9e2a4b6d8c031"),
        message: "Add notification preferences",
        timestamp: "2025-01-20T17:30:00Z",
        branches: &[],
        context: Some(("ctx-660e8400", 4, false)),
    },
    Sample {
        sha: "17e8c4a2f9b5d3016c8e2a4f6b9d1c3e5a7f9b28",
        parent: Some("d93f1b5e8a2c7046b9d1e3f5a7c9b2e4d6f8a013"),
        message: "Fix notification timing bug",
        timestamp: "2025-01-20T19:00:00Z",
        branches: &[],
        context: Some(("ctx-770e8400", 4, true)),
    },
    Sample {
        sha: "f2a6d8b0c3e5197a4d6f8b1c3e5a7d9f0b2c4e68",
        parent: Some("17e8c4a2f9b5d3016c8e2a4f6b9d1c3e5a7f9b28"),
        message: "Update dependencies",
        timestamp: "2025-01-20T20:00:00Z",
        branches: &["HEAD -> main"],
        context: None,
    },
    Sample {
        sha: "a7c2e9f4b1d6083c5e7a9b2d4f6c8e0a1b3d5f79",
        parent: Some("17e8c4a2f9b5d3016c8e2a4f6b9d1c3e5a7f9b28"),
        message: "Prototype push notifications",
        timestamp: "2025-01-20T20:30:00Z",
        branches: &["feature/push"],
        context: None,
    },
];

/// Transcript entry: role, timestamp, content
type SampleMessage = (MessageRole, &'static str, &'static str);

const AUTH_SESSION: &[SampleMessage] = &[
    (
        User,
        "2025-01-20T10:00:00Z",
        "I need to implement a user authentication system for my web app. Can you help me set this up?",
    ),
    (
        Assistant,
        "2025-01-20T10:00:05Z",
        "I'll help you implement a user authentication system. Let's start with the core \
         components: user registration, login, and session management. What framework are you using?",
    ),
    (
        User,
        "2025-01-20T10:00:30Z",
        "We're using Next.js with Supabase for the backend.",
    ),
    (
        Assistant,
        "2025-01-20T10:00:45Z",
        "Perfect! Supabase has excellent auth support. I'll set up:\n\
         1. Supabase client configuration\n\
         2. Login/signup forms\n\
         3. Protected routes with middleware\n\
         4. Session management",
    ),
    (
        User,
        "2025-01-20T10:05:00Z",
        "That sounds great. Can you also add password validation?",
    ),
    (
        Assistant,
        "2025-01-20T10:05:15Z",
        "Absolutely. Passwords will need at least 8 characters, one uppercase letter, one \
         number and one special character, with real-time feedback in the UI.",
    ),
    (
        User,
        "2025-01-20T11:30:00Z",
        "The auth middleware seems to be running on every request. Can we optimize that?",
    ),
    (
        Assistant,
        "2025-01-20T11:30:20Z",
        "Good catch! Let's refactor the middleware to only run on protected routes. I'll update \
         the matcher config to exclude /login, /signup and static assets.",
    ),
    (
        User,
        "2025-01-20T14:00:00Z",
        "Now I need password reset functionality. Users should be able to reset via email.",
    ),
    (
        Assistant,
        "2025-01-20T14:00:25Z",
        "I'll implement password reset with these steps:\n\
         1. Forgot password page with email input\n\
         2. Reset email with a magic link\n\
         3. Reset password page to set the new password\n\
         4. Confirmation and redirect to login",
    ),
];

const NOTIFY_SESSION: &[SampleMessage] = &[
    (
        System,
        "2025-01-20T16:00:00Z",
        "--- USER STARTED NEW SESSION (session-2) ---",
    ),
    (
        User,
        "2025-01-20T16:00:10Z",
        "I want to add email notifications when users sign up. How should I implement this?",
    ),
    (
        Assistant,
        "2025-01-20T16:00:35Z",
        "Let's use Supabase Edge Functions and a transactional email service. I'll create a \
         welcome template, a signup trigger, the service integration and retry logic.",
    ),
    (
        User,
        "2025-01-20T17:30:00Z",
        "Users should be able to opt out of non-critical emails. Can we add notification preferences?",
    ),
    (
        Assistant,
        "2025-01-20T17:30:40Z",
        "Great idea! I'll add a preferences table, a settings page with toggles, and a check \
         before sending. Security emails stay mandatory.",
    ),
];

const BUGFIX_SESSION: &[SampleMessage] = &[
    (
        System,
        "2025-01-20T19:00:00Z",
        "--- USER STARTED NEW SESSION (session-3) ---",
    ),
    (
        User,
        "2025-01-20T19:00:15Z",
        "I found a bug - notifications are going out immediately instead of being scheduled.",
    ),
    (
        Assistant,
        "2025-01-20T19:00:35Z",
        "Let me check the trigger configuration, the scheduling logic and the timestamp \
         handling in the email queue.",
    ),
    (
        User,
        "2025-01-20T19:05:00Z",
        "Marketing emails should go out at 9 AM in the user's timezone.",
    ),
    (
        Assistant,
        "2025-01-20T19:05:30Z",
        "We weren't storing timezone data. I'll capture it on signup and convert scheduled \
         times to UTC.",
    ),
];

const SESSIONS: &[(&str, &str, &[SampleMessage])] = &[
    ("ctx-550e8400", "a", AUTH_SESSION),
    ("ctx-660e8400", "b", NOTIFY_SESSION),
    ("ctx-770e8400", "c", BUGFIX_SESSION),
];

/// Sample commits, oldest first
pub fn sample_commits() -> Vec<Commit> {
    SAMPLES
        .iter()
        .map(|s| Commit {
            sha: s.sha.to_string(),
            author_email: "dev@example.com".to_string(),
            timestamp: s.timestamp.to_string(),
            message: s.message.to_string(),
            parent_sha: s.parent.map(str::to_string),
            branches: s.branches.iter().map(|b| b.to_string()).collect(),
            context: s
                .context
                .map(|(id, messages, new)| ConversationContext::new(id, messages, new)),
        })
        .collect()
}

/// Transcripts of the sample sessions, keyed by `context_id`
///
/// Message ids are `<prefix><n>` and each message replies to the one
/// before it.
pub fn sample_conversations() -> ConversationMap {
    SESSIONS
        .iter()
        .map(|&(context_id, prefix, samples)| {
            let messages = samples
                .iter()
                .enumerate()
                .map(|(i, &(role, timestamp, content))| Message {
                    role,
                    content: content.to_string(),
                    timestamp: timestamp.to_string(),
                    uuid: format!("{prefix}{}", i + 1),
                    parent_uuid: (i > 0).then(|| format!("{prefix}{i}")),
                })
                .collect();
            (
                context_id.to_string(),
                Conversation::new(context_id, messages),
            )
        })
        .collect()
}
