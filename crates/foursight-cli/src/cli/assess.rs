use crate::cli::assess::prompt::ProgressPrompt;
use crate::cli::context;
use crate::opt::{Assess, Global};
use anyhow::{Context, Result, anyhow, bail};
use foursight_config::assessment::Assessment;
use foursight_config::assessment::question::Question;
use foursight_core::assessment::{AssessmentResult, AssessmentSession};
use indexmap::IndexMap;
use reedline::{Reedline, Signal};
use std::path::Path;

pub(crate) mod prompt;

enum Input {
    Answer(u32),
    Reset,
    Quit,
    Invalid,
}

fn parse_input(input: &str, question: &Question) -> Input {
    match input.trim() {
        "q" | "quit" | "exit" => Input::Quit,
        "r" | "reset" => Input::Reset,
        choice => choice
            .parse::<usize>()
            .ok()
            .and_then(|choice| choice.checked_sub(1))
            .and_then(|index| question.options.get(index))
            .map_or(Input::Invalid, |option| Input::Answer(option.score)),
    }
}

fn section_title<'a>(assessment: &'a Assessment, question_id: &str) -> Option<&'a str> {
    assessment
        .sections
        .values()
        .find(|section| section.questions.contains_key(question_id))
        .map(|section| section.title.as_str())
}

/// Returns `false` if the user quit before answering everything.
fn ask(session: &mut AssessmentSession<'_>) -> Result<bool> {
    let assessment = session.assessment();
    println!("{}", assessment.title);
    if let Some(description) = &assessment.description {
        println!("{description}");
    }
    println!("Answer with the number of an option, `r` starts over, `q` quits.");

    let mut line_editor = Reedline::create();
    let mut current_section = None;
    while let Some(question) = session.next_unanswered() {
        let section = section_title(assessment, &question.id);
        if section != current_section {
            if let Some(section) = section {
                println!("\n== {section} ==");
            }
            current_section = section;
        }
        println!("\n{}", question.text);
        for (index, option) in question.options.iter().enumerate() {
            println!("  {}) {}", index + 1, option.label);
        }

        let prompt = ProgressPrompt::new(session.progress());
        match line_editor.read_line(&prompt)? {
            Signal::Success(input) => match parse_input(&input, question) {
                Input::Answer(score) => session.answer(&question.id, score)?,
                Input::Reset => {
                    session.reset();
                    current_section = None;
                    println!("Starting over");
                }
                Input::Quit => return Ok(false),
                Input::Invalid => eprintln!("Pick a number between 1 and {}", question.options.len()),
            },
            Signal::CtrlD | Signal::CtrlC => {
                println!("\nAborted!");
                return Ok(false);
            }
        }
    }
    Ok(true)
}

fn answer_all(session: &mut AssessmentSession<'_>, answers: IndexMap<String, u32>) -> Result<()> {
    for (question_id, score) in answers {
        session.answer(&question_id, score)?;
    }
    let (answered, total) = session.progress();
    if !session.is_complete() {
        bail!("Only {answered} of {total} questions are answered");
    }
    Ok(())
}

async fn read_answers(path: &Path) -> Result<IndexMap<String, u32>> {
    let content = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_yml::from_slice(&content).with_context(|| format!("{} is not a map of question ids to scores", path.display()))
}

fn print_result(result: &AssessmentResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }
    println!("\nYour score: {} of {}", result.score, result.max_score);
    println!("Maturity: {}", result.band.label);
    println!("{}", result.band.description);
    println!("\nNext step: {}", result.band.inference);
    Ok(())
}

pub(crate) async fn exec(global: &Global, opt: Assess) -> Result<()> {
    let site = context::site_config(global).await?;
    let assessment = site
        .assessments
        .get(&opt.assessment)
        .ok_or_else(|| anyhow!("Unknown assessment {}", opt.assessment))?;
    let mut session = AssessmentSession::new(assessment);

    if let Some(path) = &opt.answers {
        answer_all(&mut session, read_answers(path).await?)?;
    } else if !ask(&mut session)? {
        return Ok(());
    }

    let result = session
        .submit()
        .ok_or_else(|| anyhow!("Assessment is not complete"))?;
    print_result(result, opt.json)
}
