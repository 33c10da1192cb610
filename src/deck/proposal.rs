//! Module with the content of the training proposal deck.
//!
//! Positions and sizes are in inches, font sizes in points.

use crate::model::{Color, HAlign, AMBER, BLUE, DARK_BG, EMERALD, PURPLE,
                   SLATE_300, SLATE_400, SLATE_600, WHITE};
use super::model::{Presentation, Slide};


pub const TITLE: &str = "Executive AI Training Proposal";

/// Headline text on light slides.
const INK: Color = DARK_BG;
/// Body text on light slides.
const BODY: Color = SLATE_600;

/// Horizontal pitch of three-column layouts.
const COLUMN_PITCH: f64 = 4.0;
/// Vertical pitch of bullet lists.
const BULLET_PITCH: f64 = 0.35;


/// Build the complete proposal deck.
pub fn proposal() -> Presentation {
    let mut prs = Presentation::widescreen().with_title(TITLE);

    cover(prs.add_dark_slide("Cover"));
    problem(prs.add_light_slide());
    solution(prs.add_dark_slide("Solution"));
    evolution(prs.add_dark_slide("Evolution"));
    skills_gap(prs.add_light_slide());
    approach(prs.add_light_slide());
    workshop(prs.add_light_slide());
    curriculum(prs.add_dark_slide("Curriculum"));
    outcomes(prs.add_light_slide());
    measurement(prs.add_dark_slide("Measurement"));
    why_workflowy(prs.add_light_slide());
    team(prs.add_light_slide());
    investment(prs.add_dark_slide("Investment"));
    next_steps(prs.add_dark_slide("Next Steps"));

    debug!("Proposal deck has {} slides", prs.slide_count());
    prs
}


/// Small uppercase label above a slide's headline.
fn section_label(slide: &mut Slide, text: &str, color: Color) {
    slide.add_text_box(0.8, 0.5, 3.0, 0.4, text).size(12.0).bold().color(color);
}

fn headline(slide: &mut Slide, text: &str, height: f64, color: Color) {
    slide.add_text_box(0.8, 0.9, 11.0, height, text).size(40.0).bold().color(color);
}

fn bullets(slide: &mut Slide, items: &[&str], marker: &str, (x, y): (f64, f64),
           width: f64, pitch: f64, size: f64, color: Color) {
    for (j, item) in items.iter().enumerate() {
        let text = format!("{} {}", marker, item);
        slide.add_text_box(x, y + j as f64 * pitch, width, 0.3, text).size(size).color(color);
    }
}

/// Horizontal position of the `i`-th column in a grid starting at 0.8".
fn column(i: usize, pitch: f64) -> f64 {
    0.8 + i as f64 * pitch
}


fn cover(slide: &mut Slide) {
    let lines: &[(f64, f64, &str, f64, bool, Color)] = &[
        (1.5, 0.5, "Workflowy × Deloitte", 24.0, false, WHITE),
        (2.5, 1.0, "Executive AI Training", 54.0, true, WHITE),
        (3.8, 0.5, "Half-Day Intensive for Deloitte Leaders", 24.0, false, SLATE_300),
        (4.5, 0.5, "January 2026", 18.0, false, SLATE_400),
        (5.5, 0.5, "Trusted by leaders at Google, KPMG, TD Bank, RBC", 14.0, false, SLATE_400),
    ];
    for &(top, height, text, size, bold, color) in lines {
        let text_box = slide.add_text_box(1.0, top, 11.0, height, text);
        text_box.size(size).color(color).align(HAlign::Center);
        if bold {
            text_box.bold();
        }
    }
}

fn problem(slide: &mut Slide) {
    section_label(slide, "THE PROBLEM", BLUE);
    headline(slide, "AI capability is compounding.\nEnterprise readiness is not.", 1.0, INK);
    slide.add_text_box(0.8, 2.2, 10.0, 0.5,
        "Most deployments stall at chat interfaces, copilots, or fragile pilots \
         that collapse under real operational pressure.")
        .size(16.0).color(BODY);

    let problems = [
        ("Pilots Everywhere, Impact Nowhere",
            "AI lives at the edges: chat interfaces and brittle demos."),
        ("Chat ≠ Capability", "Teams ask AI questions. They don't build with it."),
        ("Intelligence Without Infrastructure", "Powerful AI, no systems to deploy it."),
    ];
    for (i, &(title, desc)) in problems.iter().enumerate() {
        let x = column(i, COLUMN_PITCH);
        slide.add_rounded_card(x, 3.0, 3.7, 1.5);
        slide.add_text_box(x + 0.2, 3.2, 3.3, 0.4, title).size(14.0).bold().color(INK);
        slide.add_text_box(x + 0.2, 3.6, 3.3, 0.8, desc).size(12.0).color(BODY);
    }

    let stats = [
        ("72%", "report AI skills gaps as top barrier"),
        ("$4.4T", "annual GenAI value, mostly untapped"),
        ("3x", "gains with structured training"),
    ];
    for (i, &(number, desc)) in stats.iter().enumerate() {
        let x = 1.5 + i as f64 * COLUMN_PITCH;
        slide.add_text_box(x, 5.0, 3.0, 0.5, number)
            .size(32.0).bold().color(BLUE).align(HAlign::Center);
        slide.add_text_box(x, 5.6, 3.0, 0.5, desc)
            .size(11.0).color(BODY).align(HAlign::Center);
    }
}

fn solution(slide: &mut Slide) {
    section_label(slide, "OUR SOLUTION", BLUE);
    slide.add_text_box(0.8, 0.9, 11.0, 1.2,
        "We don't teach AI.\nWe extract and operationalize\nyour workflows.")
        .size(36.0).bold().color(WHITE);
    slide.add_text_box(0.8, 2.5, 10.0, 0.8,
        "The real value lives in the tacit knowledge of your people: the approvals, \
         the edge cases, the \"how we actually do things here.\"")
        .size(16.0).color(SLATE_300);

    let solutions = [
        ("Workflow Extraction",
            "Surface processes and institutional knowledge, systematize them for AI."),
        ("Live Builds",
            "Build functional AI solutions together, deployed in hours, not months."),
        ("Your Platforms",
            "Master Microsoft Copilot, Google Gemini, AWS with Claude. No new vendors."),
    ];
    for (i, &(title, desc)) in solutions.iter().enumerate() {
        let x = column(i, COLUMN_PITCH);
        slide.add_text_box(x, 3.5, 3.5, 0.4, title).size(18.0).bold().color(WHITE);
        slide.add_text_box(x, 4.0, 3.5, 0.8, desc).size(13.0).color(SLATE_400);
    }
}

fn evolution(slide: &mut Slide) {
    section_label(slide, "THE EVOLUTION", BLUE);
    headline(slide, "From chatbots to autonomous agents", 0.8, WHITE);
    slide.add_text_box(0.8, 1.8, 10.0, 0.5,
        "Leading enterprises are moving beyond chat. Can your people keep up?")
        .size(16.0).color(SLATE_400);

    let stages = [
        ("Stage 1", "Chat Interface", "Human at keyboard. Reactive Q&A.",
            "Where most are today", SLATE_400),
        ("Stage 2", "Human Guided Agents", "AI completes multi-step tasks.",
            "Where leaders need to be", BLUE),
        ("Stage 3", "Autonomous Agents", "AI acts independently.",
            "Where enterprises are headed", PURPLE),
    ];
    for (i, &(stage, title, desc, note, color)) in stages.iter().enumerate() {
        let x = column(i, COLUMN_PITCH);
        slide.add_text_box(x, 2.8, 3.5, 0.3, stage).size(11.0).color(color);
        slide.add_text_box(x, 3.1, 3.5, 0.4, title).size(18.0).bold().color(WHITE);
        slide.add_text_box(x, 3.5, 3.5, 0.5, desc).size(13.0).color(SLATE_400);
        slide.add_text_box(x, 4.1, 3.5, 0.3, note).size(11.0).color(color);
    }

    slide.add_text_box(0.8, 5.5, 11.5, 0.8,
        "Your clients are already building agentic platforms. \
         Major banks are deploying agent architectures with LLM gateways.")
        .size(14.0).color(SLATE_300).align(HAlign::Center);
}

fn skills_gap(slide: &mut Slide) {
    section_label(slide, "THE SKILLS GAP", BLUE);
    headline(slide, "Three levels of AI capability", 0.8, INK);
    slide.add_text_box(0.8, 1.8, 10.0, 0.5,
        "Enterprises need people across all three levels. Most have only Level 1.")
        .size(16.0).color(BODY);

    let levels: [(&str, &str, &str, [&str; 3]); 3] = [
        ("No Code", "AI User", "Everyday use, boosting productivity.",
            ["Summarize meeting notes", "Draft proposals", "Research benchmarks"]),
        ("Low Code", "AI Builder", "Power users driving automation.",
            ["Build client analyzer agents", "Automate workflows", "Create pipelines"]),
        ("Pro Code", "AI Architect", "Advanced programmatic control.",
            ["Audit automation with HITL", "Native agents for delivery", "Enterprise integration"]),
    ];
    for (i, &(badge, title, desc, ref items)) in levels.iter().enumerate() {
        let x = column(i, COLUMN_PITCH);
        slide.add_text_box(x, 2.5, 1.2, 0.3, badge).size(11.0).bold().color(WHITE);
        slide.add_text_box(x, 2.9, 3.5, 0.4, title).size(20.0).bold().color(INK);
        slide.add_text_box(x, 3.4, 3.5, 0.4, desc).size(12.0).color(BODY);
        bullets(slide, items, "•", (x, 3.9), 3.5, BULLET_PITCH, 11.0, BODY);
    }

    slide.add_text_box(0.8, 5.5, 11.5, 0.8,
        "The risk isn't AI replacing your consultants.\n\
         It's competitors whose consultants know how to use AI winning your engagements.")
        .size(14.0).bold().color(INK).align(HAlign::Center);
}

fn approach(slide: &mut Slide) {
    section_label(slide, "OUR APPROACH", BLUE);
    headline(slide, "From awareness to operational capability", 0.8, INK);

    slide.add_text_box(0.8, 1.8, 6.0, 0.4, "Example Functions You'll Build:")
        .size(14.0).bold().color(BODY);
    let functions = ["Client Brief Generator", "Research Synthesizer",
                     "Data Story Builder", "Meeting Prep Agent"];
    for (i, function) in functions.iter().enumerate() {
        slide.add_text_box(column(i, 3.0), 2.2, 2.8, 0.3, *function).size(12.0).color(INK);
    }

    let steps: [(&str, &str, [&str; 3]); 3] = [
        ("1", "Assess & Baseline", ["Pre-session readiness assessment",
            "Individual skill baselining", "Gap & opportunity mapping"]),
        ("2", "Custom Training", ["Role specific content", "Your approved tools",
            "Hands on building"]),
        ("3", "Measure & Scale", ["Post-session skill assessment",
            "Champion identification", "ROI reporting & scale plan"]),
    ];
    for (i, &(number, title, ref items)) in steps.iter().enumerate() {
        let x = column(i, COLUMN_PITCH);
        slide.add_text_box(x, 3.0, 0.4, 0.4, number).size(18.0).bold().color(WHITE);
        slide.add_text_box(x + 0.5, 3.0, 3.0, 0.4, title).size(18.0).bold().color(INK);
        bullets(slide, items, "•", (x, 3.5), 3.5, BULLET_PITCH, 11.0, BODY);
    }

    slide.add_text_box(0.8, 5.2, 11.5, 0.4,
        "Training on Your Tools: Claude • Gemini • Copilot • Gen D • Cursor")
        .size(14.0).color(SLATE_400).align(HAlign::Center);
}

fn workshop(slide: &mut Slide) {
    section_label(slide, "PROPOSED WORKSHOP", BLUE);
    headline(slide, "Half-Day Executive AI Intensive", 0.8, INK);
    slide.add_text_box(0.8, 1.8, 10.0, 0.5,
        "A focused, hands-on session designed to shift your leaders from curious to capable.")
        .size(16.0).color(BODY);

    let details = [
        ("20 Participants", "Service line and industry leaders"),
        ("Pre-Session Discovery", "Tools, constraints, priorities"),
        ("Custom Curriculum", "Your approved tech stack"),
        ("Live Builds", "Create something real"),
    ];
    for (i, &(title, desc)) in details.iter().enumerate() {
        let x = column(i, 3.0);
        slide.add_text_box(x, 2.8, 2.8, 0.4, title).size(16.0).bold().color(INK);
        slide.add_text_box(x, 3.2, 2.8, 0.4, desc).size(12.0).color(BODY);
    }

    slide.add_text_box(0.8, 4.5, 11.5, 0.8,
        "WorkflowyOS Learning Platform Included:\n\
         Interactive courses, progress tracking, AI coaching assistant, and post-session resources.")
        .size(14.0).color(INK).align(HAlign::Center);
}

fn curriculum(slide: &mut Slide) {
    section_label(slide, "PROGRAM CURRICULUM", BLUE);
    headline(slide, "Four hours, four modules", 0.8, WHITE);
    slide.add_text_box(0.8, 1.7, 10.0, 0.4,
        "50% interactive discussion, 50% hands-on application.")
        .size(14.0).color(SLATE_400);

    let modules = [
        ("1", "AI Landscape & Reality Check", "45 min",
            "Cut through the hype. What AI can actually do today.", BLUE),
        ("2", "AI Fluency Fundamentals", "60 min",
            "Master prompt engineering with RACE framework.", PURPLE),
        ("3", "Hands-On Building", "90 min",
            "Live build exercises using your approved tools.", EMERALD),
        ("4", "Workflow Integration", "45 min",
            "Leave with a personalized AI adoption roadmap.", AMBER),
    ];
    for (i, &(number, title, time, desc, color)) in modules.iter().enumerate() {
        let x = column(i % 2, 6.0);
        let y = 2.3 + (i / 2) as f64 * 1.8;
        slide.add_text_box(x, y, 0.4, 0.4, number).size(18.0).bold().color(color);
        slide.add_text_box(x + 0.5, y, 4.5, 0.4, title).size(16.0).bold().color(WHITE);
        slide.add_text_box(x + 5.2, y, 0.8, 0.3, time).size(10.0).color(SLATE_400);
        slide.add_text_box(x + 0.5, y + 0.4, 5.0, 0.4, desc).size(12.0).color(SLATE_400);
    }
}

fn outcomes(slide: &mut Slide) {
    section_label(slide, "PARTICIPANT OUTCOMES", BLUE);
    headline(slide, "What your leaders leave with", 0.8, INK);

    let outcomes: [(&str, [&str; 3]); 4] = [
        ("Mindset Shift", ["From \"AI as search\" to \"AI as assistant\"",
            "Clear AI capabilities vs. limitations", "Confidence with clients and teams"]),
        ("Practical Skills", ["RACE framework for prompts",
            "Identify 3+ automation opportunities", "Navigate security boundaries"]),
        ("Tangible Deliverables", ["Pre/post skill progression report",
            "Working AI solution built in session", "Role-specific prompt library"]),
        ("Post-Session Resources", ["Curated resource kit & templates",
            "30-day email follow-up series", "Partner network access"]),
    ];
    for (i, &(title, ref items)) in outcomes.iter().enumerate() {
        let x = column(i % 2, 6.0);
        let y = 1.8 + (i / 2) as f64 * 2.2;
        slide.add_text_box(x, y, 5.5, 0.4, title).size(16.0).bold().color(INK);
        bullets(slide, items, "✓", (x, y + 0.4), 5.5, BULLET_PITCH, 11.0, BODY);
    }
}

fn measurement(slide: &mut Slide) {
    section_label(slide, "MEASURABLE IMPACT", EMERALD);
    headline(slide, "Skills-based assessment. Proven ROI.", 0.8, WHITE);
    slide.add_text_box(0.8, 1.8, 10.0, 0.5,
        "We measure skill progression before and after, \
         giving you concrete data on your AI readiness investment.")
        .size(14.0).color(SLATE_300);

    let columns: [(f64, &str, [&str; 3]); 2] = [
        (0.8, "Pre/Post AI Readiness Assessment", ["Baseline assessment before training",
            "Post-session competency evaluation", "30/60/90-day follow-up measurements"]),
        (7.0, "Skills-Based Talent Reporting", ["Identify high-potential AI adopters",
            "Skills heat map across roles", "Targeted development paths"]),
    ];
    for &(x, title, ref items) in columns.iter() {
        slide.add_text_box(x, 2.6, 5.5, 0.4, title).size(16.0).bold().color(WHITE);
        bullets(slide, items, "✓", (x, 3.0), 5.5, BULLET_PITCH, 12.0, SLATE_300);
    }

    slide.add_text_box(0.8, 4.5, 11.5, 0.4,
        "The Workflowy Difference: Live Builds + Measured Impact")
        .size(18.0).bold().color(WHITE).align(HAlign::Center);
    slide.add_text_box(0.8, 5.0, 11.5, 0.4,
        "Other programs measure awareness. \
         We measure capability because participants build working solutions.")
        .size(14.0).color(SLATE_300).align(HAlign::Center);

    let metrics = [("100%", "Build something real"), ("Pre+Post", "Skill progression"),
                   ("Champions", "For scale-out")];
    for (i, &(number, desc)) in metrics.iter().enumerate() {
        let x = 2.0 + i as f64 * 3.5;
        slide.add_text_box(x, 5.7, 3.0, 0.5, number)
            .size(28.0).bold().color(EMERALD).align(HAlign::Center);
        slide.add_text_box(x, 6.2, 3.0, 0.3, desc)
            .size(11.0).color(SLATE_400).align(HAlign::Center);
    }
}

fn why_workflowy(slide: &mut Slide) {
    section_label(slide, "WHY WORKFLOWY", BLUE);
    headline(slide, "What makes us different", 0.8, INK);

    let differentiators = [
        ("Hands-On, Not Theory",
            "Participants build real tools during the session. No death by PowerPoint."),
        ("Your Tools, Your Constraints",
            "We work within your approved tech stack and compliance requirements."),
        ("Results, Not Inspiration",
            "Measurable skill progression. Clear ROI. Monday morning behavior change."),
    ];
    for (i, &(title, desc)) in differentiators.iter().enumerate() {
        let x = column(i, COLUMN_PITCH);
        slide.add_text_box(x, 2.0, 3.5, 0.4, title).size(18.0).bold().color(INK);
        slide.add_text_box(x, 2.5, 3.5, 0.8, desc).size(13.0).color(BODY);
    }

    slide.add_text_box(0.8, 4.5, 11.5, 0.8,
        "\"Most AI training stops at awareness. We stop at execution.\"\n\n\
         We don't just teach people about AI. We ensure they use it.")
        .size(16.0).color(INK).align(HAlign::Center);
}

fn team(slide: &mut Slide) {
    section_label(slide, "OUR TEAM", BLUE);
    headline(slide, "Enterprise experience meets AI expertise", 0.8, INK);

    let members: [(&str, &str, [&str; 3]); 3] = [
        ("Nadim Nasser", "CEO & Head of Training", ["15+ years education & tech",
            "Former Head of Ed at Prequel", "Trained 500+ on AI"]),
        ("Drew Baillie", "Senior AI Consultant", ["25+ years AI transformation",
            "Former KPMG AI lead", "Board Director"]),
        ("Azim Ahmed", "VP Engineering", ["Head of Eng at Lazer",
            "5+ years leading teams", "AI implementation"]),
    ];
    for (i, &(name, role, ref items)) in members.iter().enumerate() {
        let x = column(i, COLUMN_PITCH);
        slide.add_text_box(x, 1.9, 3.5, 0.4, name)
            .size(18.0).bold().color(INK).align(HAlign::Center);
        slide.add_text_box(x, 2.3, 3.5, 0.3, role)
            .size(12.0).color(BLUE).align(HAlign::Center);
        bullets(slide, items, "•", (x, 2.7), 3.5, 0.3, 11.0, BODY);
    }

    slide.add_text_box(0.8, 4.2, 11.5, 0.4, "Advisory Board")
        .size(16.0).bold().color(INK).align(HAlign::Center);

    let advisors: [(&str, &str, [&str; 2]); 2] = [
        ("Armughan Ahmad", "Executive Chairman", ["30 year enterprise career",
            "Advisory: OpenAI, Telus, ServiceNow"]),
        ("Arif Bhanji", "Co-Founder, Lazer Technologies", ["Former Monitor Deloitte Consultant",
            "Y Combinator alumni"]),
    ];
    for (i, &(name, role, ref items)) in advisors.iter().enumerate() {
        let x = 2.5 + i as f64 * 5.0;
        slide.add_text_box(x, 4.7, 4.0, 0.4, name)
            .size(16.0).bold().color(INK).align(HAlign::Center);
        slide.add_text_box(x, 5.1, 4.0, 0.3, role)
            .size(11.0).color(AMBER).align(HAlign::Center);
        bullets(slide, items, "•", (x, 5.4), 4.0, 0.3, 10.0, BODY);
    }
}

fn investment(slide: &mut Slide) {
    section_label(slide, "INVESTMENT", BLUE);
    slide.add_text_box(0.8, 1.2, 11.0, 0.8, "Half-Day Executive Intensive")
        .size(40.0).bold().color(WHITE).align(HAlign::Center);
    slide.add_text_box(0.8, 2.5, 11.0, 1.0, "$50,000")
        .size(72.0).bold().color(WHITE).align(HAlign::Center);
    slide.add_text_box(0.8, 3.5, 11.0, 0.4, "For 20 participants ($2,500/executive)")
        .size(16.0).color(SLATE_400).align(HAlign::Center);

    let includes: [(&str, [&str; 4]); 3] = [
        ("Included", ["Pre-session discovery call", "Customized curriculum",
            "4-hour live intensive", "All materials & templates"]),
        ("Deliverables", ["Pre/post skill assessment", "AI readiness report",
            "Resource kit access", "30-day follow-up"]),
        ("Ongoing Support", ["WorkflowyOS platform access", "Email support for 30 days",
            "Champion certification", "Scale planning session"]),
    ];
    for (i, &(title, ref items)) in includes.iter().enumerate() {
        let x = column(i, COLUMN_PITCH);
        slide.add_text_box(x, 4.2, 3.5, 0.4, title).size(14.0).bold().color(WHITE);
        bullets(slide, items, "•", (x, 4.6), 3.5, BULLET_PITCH, 11.0, SLATE_300);
    }
}

fn next_steps(slide: &mut Slide) {
    section_label(slide, "NEXT STEPS", BLUE);
    slide.add_text_box(0.8, 1.5, 11.0, 0.8, "Ready to transform your team's\nAI capabilities?")
        .size(44.0).bold().color(WHITE).align(HAlign::Center);

    let steps = [
        ("1", "Schedule Discovery Call", "15-minute alignment on goals and constraints"),
        ("2", "Curriculum Customization", "We adapt training to your tools and use cases"),
        ("3", "Session Delivery", "Half-day intensive with your 20 leaders"),
        ("4", "Measure & Scale", "Assessment results and scale-out recommendations"),
    ];
    for (i, &(number, title, desc)) in steps.iter().enumerate() {
        let x = column(i % 2, 6.0);
        let y = 3.2 + (i / 2) as f64 * 1.2;
        slide.add_text_box(x, y, 0.4, 0.4, number).size(18.0).bold().color(BLUE);
        slide.add_text_box(x + 0.5, y, 5.0, 0.4, title).size(16.0).bold().color(WHITE);
        slide.add_text_box(x + 0.5, y + 0.4, 5.0, 0.4, desc).size(12.0).color(SLATE_400);
    }

    slide.add_text_box(0.8, 6.0, 11.0, 0.4, "nadim@workflowy.ai  |  workflowy.ai")
        .size(18.0).color(SLATE_300).align(HAlign::Center);
}


#[cfg(test)]
mod tests {
    use spectral::prelude::*;

    use crate::model::{DARK_BG, LIGHT_BG};
    use super::super::model::Shape;
    use super::super::units::Emu;
    use super::proposal;

    #[test]
    fn fourteen_widescreen_slides() {
        let prs = proposal();
        assert_that!(prs.slide_count()).is_equal_to(14);
        assert_that!(prs.width()).is_equal_to(Emu(12_191_695));
        assert_that!(prs.height()).is_equal_to(Emu(6_858_000));
    }

    #[test]
    fn dark_and_light_slides() {
        let prs = proposal();
        let dark: Vec<_> = prs.slides().iter().enumerate()
            .filter(|&(_, slide)| match slide.shapes()[0] {
                Shape::Auto(ref s) => s.fill == DARK_BG,
                _ => false,
            })
            .map(|(i, _)| i + 1)
            .collect();
        assert_that!(dark).is_equal_to(vec![1, 3, 4, 8, 10, 13, 14]);

        let light = prs.slides().iter().filter(|slide| match slide.shapes()[0] {
            Shape::Auto(ref s) => s.fill == LIGHT_BG,
            _ => false,
        }).count();
        assert_that!(light).is_equal_to(7);
    }

    #[test]
    fn only_the_problem_slide_has_cards() {
        let prs = proposal();
        let cards: Vec<_> = prs.slides().iter()
            .map(|slide| slide.shapes().iter().skip(1)
                .filter(|s| matches!(**s, Shape::Auto(..))).count())
            .collect();
        assert_that!(cards[1]).is_equal_to(3);
        assert_that!(cards.iter().sum::<usize>()).is_equal_to(3);
    }

    #[test]
    fn cover_text() {
        let prs = proposal();
        let texts: Vec<_> = prs.slides()[0].texts().collect();
        assert_that!(texts[0]).is_equal_to("Workflowy × Deloitte");
        assert_that!(texts.len()).is_equal_to(5);
    }

    #[test]
    fn bullets_carry_markers() {
        let prs = proposal();
        let outcomes: Vec<_> = prs.slides()[8].texts().collect();
        assert_that!(outcomes.contains(&"✓ RACE framework for prompts")).is_true();
        let team: Vec<_> = prs.slides()[11].texts().collect();
        assert_that!(team.contains(&"• Y Combinator alumni")).is_true();
    }

    #[test]
    fn closing_contact() {
        let prs = proposal();
        let last: Vec<_> = prs.slides()[13].texts().collect();
        assert_that!(last.last().cloned()).is_equal_to(Some("nadim@workflowy.ai  |  workflowy.ai"));
    }
}
