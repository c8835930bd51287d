//! Educational guide command.

use anyhow::Result;
use sizing_monitor::content;

use crate::cli::{GuideArgs, GuideTopic};

pub fn run(args: GuideArgs) -> Result<()> {
    let text = match args.topic {
        GuideTopic::Beginner => content::render_plain("IMPORTANT: Read this first!", content::beginner()),
        GuideTopic::Poker => content::render_plain(
            "The poker analogy: why trade grades are like poker hands",
            content::poker(),
        ),
    };
    print!("{}", text);
    Ok(())
}
