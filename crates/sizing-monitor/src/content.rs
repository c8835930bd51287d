//! Static educational text for the beginner and poker pages.

/// A titled block of prose with optional bullet points.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub title: &'static str,
    pub paragraphs: &'static [&'static str],
    pub bullets: &'static [&'static str],
}

const BEGINNER: &[Section] = &[
    Section {
        title: "Exponential bet sizing is NOT for beginners!",
        paragraphs: &[
            "This calculator and the whole method rest on one principle: you must be able to \
             tell your A-trades from your D-trades in real time, BEFORE the entry.",
        ],
        bullets: &[],
    },
    Section {
        title: "1. Empirical data from your journal",
        paragraphs: &[
            "Without evaluating your own setups in a journal you lack the empirical basis for \
             precise grading.",
            "The win rates in this tool (90%, 70%, 55%, 40%) come from Lance Breitstein's sample \
             case study, not from your real trading data. You cannot guess the win rate of your \
             setups. You have to measure it.",
            "Minimum: 30-50 trades per grade before drawing conclusions. Better: 100+ trades for \
             statistical significance.",
        ],
        bullets: &[],
    },
    Section {
        title: "2. A developed trading strategy",
        paragraphs: &[
            "You need a proven playbook with defined setups:",
            "No clear system yet? Learn one strategy first with small, constant position sizes. \
             Bet sizing comes later.",
        ],
        bullets: &[
            "Stage 2 breakout setup",
            "Momentum plays with a catalyst",
            "Mean reversion at support",
            "Swing trades after consolidation",
        ],
    },
    Section {
        title: "3. Psychological stability",
        paragraphs: &[
            "You must be able to trade larger sizes without it changing your psychology.",
            "If 8x your normal size makes you nervous, so you exit early or ignore your entry \
             rules, you destroy the whole expected value advantage. Position size must NOT \
             affect your execution.",
            "Warning: many traders ruin their accounts by scaling too fast, before they are \
             psychologically ready.",
        ],
        bullets: &[],
    },
    Section {
        title: "The right path to exponential sizing",
        paragraphs: &[],
        bullets: &[
            "Phase 1 (months 1-6): learn your setup. Trade small, constant size. Keep a detailed \
             journal. Goal: consistency.",
            "Phase 2 (months 7-12): analyze your journal, identify your best setups. Start with \
             light linear sizing (1x, 1.5x, 2x, 3x). Collect more data.",
            "Phase 3 (year 2+): with 100+ trades and proven consistency, carefully start \
             exponential sizing. Increase by 10% per month.",
            "Phase 4 (elite level): after years of experience and psychological mastery, scale \
             aggressively on A-setups (1x, 3x, 9x, 27x).",
        ],
    },
    Section {
        title: "Your next step",
        paragraphs: &[
            "No complete trade journal yet? Start one NOW. Minimal journal per trade:",
            "After 50-100 trades you have enough data to compute your real win rate per grade. \
             Then, and only then, use the calculator with your own numbers.",
        ],
        bullets: &[
            "Date and ticker",
            "Setup type (e.g. \"Stage 2 breakout\")",
            "Grade BEFORE entry (A/B/C/D), this is critical",
            "Entry and exit price",
            "Result (win/loss/breakeven)",
            "P&L in euros",
            "Short note: why this grade? What went well or badly?",
        ],
    },
    Section {
        title: "Remember",
        paragraphs: &[
            "Elite traders did not become elite overnight. They spent years perfecting their \
             craft before they could scale aggressively.",
            "Be patient with yourself. Focus on consistency before sizing.",
        ],
        bullets: &[],
    },
];

const POKER: &[Section] = &[
    Section {
        title: "9-2 hand (D-Trade)  9♣ 2♥  win rate 38.9%",
        paragraphs: &[
            "The worst starting hand in poker. You only play it when you have to (big blind), \
             and you never bet big on it.",
        ],
        bullets: &[],
    },
    Section {
        title: "Pocket aces (A-Trade)  A♥ A♠  win rate 85.3%",
        paragraphs: &[
            "The strongest starting hand. It comes only once in 221 hands (0.45%). When you get \
             it: go all-in!",
        ],
        bullets: &[],
    },
    Section {
        title: "The decisive question",
        paragraphs: &[
            "Imagine you sit at the poker table and alternately get 9-2 and pocket aces. Would \
             you bet the same on both hands? Of course not, that would be financial suicide.",
            "Trading works the same way: betting the same size on a D-trade and an A-trade \
             gives away massive potential.",
        ],
        bullets: &[],
    },
    Section {
        title: "Trading = professional poker",
        paragraphs: &[],
        bullets: &[
            "Both poker and trading are about playing probabilities, not guarantees.",
            "Pocket aces come only 0.45% of the time, just like A-trades appear only 2-3x a month.",
            "Professional players size bets to hand strength, just as you should size positions \
             to trade grade.",
            "Elite traders, like elite poker players, make most of their money on a few big \
             hands. They recognize the pocket aces and bet heavily on them.",
        ],
    },
];

/// Closing line shown under every page.
pub const FOOTER: &str = "Elite traders make 80%+ of their yearly performance with less than 5% \
                          of their trades. The art is recognizing the pocket aces, then betting \
                          the ranch.";

/// Prerequisites, roadmap and journal checklist.
pub fn beginner() -> &'static [Section] {
    BEGINNER
}

/// Poker hand analogy.
pub fn poker() -> &'static [Section] {
    POKER
}

/// Render sections as plain text for the terminal.
pub fn render_plain(heading: &str, sections: &[Section]) -> String {
    let mut s = String::new();
    s.push_str(heading);
    s.push('\n');
    s.push_str(&"═".repeat(heading.chars().count()));
    s.push_str("\n\n");

    for section in sections {
        s.push_str(section.title);
        s.push('\n');
        for paragraph in section.paragraphs {
            s.push_str("  ");
            s.push_str(paragraph);
            s.push('\n');
        }
        for bullet in section.bullets {
            s.push_str("  • ");
            s.push_str(bullet);
            s.push('\n');
        }
        s.push('\n');
    }

    s.push_str(FOOTER);
    s.push('\n');
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beginner_content() {
        let text = render_plain("Read this first", beginner());

        assert!(text.starts_with("Read this first\n═══"));
        assert!(text.contains("Phase 4 (elite level)"));
        assert!(text.contains("  • Grade BEFORE entry"));
        assert!(text.ends_with(&format!("{}\n", FOOTER)));
    }

    #[test]
    fn test_poker_content() {
        let sections = poker();

        assert_eq!(sections.len(), 4);
        assert!(sections[1].title.contains("85.3%"));
    }
}
