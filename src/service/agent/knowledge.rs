//! Built-in answers to frequent support questions.

struct FaqEntry {
    /// Normalized phrases; the entry matching most of them wins.
    keywords: &'static [&'static str],
    answer: &'static str,
}

const FAQ: &[FaqEntry] = &[
    FaqEntry {
        keywords: &["premium", "buy", "shop", "zg50", "zg100", "zg500", "zg1000"],
        answer: "Premium roles are sold with /shop and /buy. Each lasts 30 days: \
                 zG50 costs 49, zG100 99, zG500 499 and zG1000 999. Buying a higher \
                 role refunds the unused days of your current one.",
    },
    FaqEntry {
        keywords: &["balance", "wallet", "money", "coins", "top up", "payment", "donate"],
        answer: "Check your wallet with /balance. To top it up, pay with your Discord ID \
                 in the payment name; the bot credits it automatically within a few minutes.",
    },
    FaqEntry {
        keywords: &["voice", "channel", "speak", "connect", "limit", "mod"],
        answer: "Join the create-channel voice channel to get your own channel. With \
                 premium you can manage it with /speak, /connect, /view, /text, /live, \
                 /mod, /limit and /reset.",
    },
    FaqEntry {
        keywords: &["mute", "muted", "unmute", "timeout", "ban"],
        answer: "Mutes expire on their own when their time is up. If you think a mute is \
                 a mistake, contact a moderator.",
    },
    FaqEntry {
        keywords: &["activity", "points", "rank", "ranking", "level"],
        answer: "You earn activity points for messages and for time in voice channels \
                 with other members. See yours with /profile and the top members with /ranking.",
    },
    FaqEntry {
        keywords: &["invite", "invites", "invited"],
        answer: "/invites shows how many members joined through your invites.",
    },
];

/// Finds a built-in answer for a normalized question.
pub fn find_answer(normalized_question: &str) -> Option<&'static str> {
    let words: Vec<&str> = normalized_question.split(' ').collect();
    let padded = format!(" {normalized_question} ");

    FAQ.iter()
        .map(|entry| {
            let hits = entry
                .keywords
                .iter()
                .filter(|keyword| {
                    if keyword.contains(' ') {
                        padded.contains(&format!(" {keyword} "))
                    } else {
                        words.contains(keyword)
                    }
                })
                .count();
            (hits, entry)
        })
        .filter(|(hits, _)| *hits > 0)
        .max_by_key(|(hits, _)| *hits)
        .map(|(_, entry)| entry.answer)
}
