//! Prompt text for drafting and revising a letter with a language model.
//!
//! Only the text is built here; sending it to a model service is up to the
//! caller.

use crate::conversation::{self, Conversation};
use crate::error::{Error, Result};

pub const SYSTEM_PROMPT: &str = "\
You are an AI assistant trained to write a cover letter for job applications. \
The candidate has submitted their resume, and the task is to create a coherent and personalized \
cover letter that aligns with the job description. \
The letter should highlight the candidate's relevant skills, experiences, and background in \
relation to the job requirements. \
It should comprise three paragraphs: in the first you highlight why the position is relevant \
for the candidate, in the second you summarize the candidate's experiences and background and \
then in the last one you present the candidate personal goals, if any.";

/// Reply the model is told to give when résumé and posting do not match.
pub const MISALIGNED_REPLY: &str =
    "The job description is not aligned with the candidate's resume";

/// How much of the session a follow-up request carries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContextPolicy {
    /// Send the user's message on its own, as a new chat.
    #[default]
    Fresh,
    /// Prefix the message with the whole session transcript.
    Replay,
}

fn require<'a>(value: &'a str, field: &'static str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::MissingInput(field));
    }
    Ok(trimmed)
}

/// Full first-turn prompt: system instructions followed by the request that
/// embeds the résumé text and the job posting.
pub fn letter_request(resume_text: &str, job_description: &str) -> Result<String> {
    let resume = require(resume_text, "resume")?;
    let job = require(job_description, "job description")?;

    Ok(format!(
        "{SYSTEM_PROMPT}\n\
         Given the following resume: {resume} and the following job description: {job}, \
         write a cover letter for the candidate coherent with their experiences, background, \
         and skills and aligned with the job posting.\n\
         Do not invent extra information but go into detail. The cover letter should be a page long.\n\
         If you think the job posting does not match the resume you are passed, reply with \
         '{MISALIGNED_REPLY}': for example, do not write the cover letter if the area of interest \
         of the candidate, their experiences, and background are not aligned with the role and \
         the company's function"
    ))
}

/// Prompt for a follow-up turn. The message is not added to `log`; the
/// caller records both the request and the reply.
pub fn follow_up(log: &Conversation, user_message: &str, policy: ContextPolicy) -> Result<String> {
    let message = require(user_message, "message")?;

    match policy {
        ContextPolicy::Fresh => Ok(message.to_string()),
        ContextPolicy::Replay if log.is_empty() => Ok(message.to_string()),
        ContextPolicy::Replay => Ok(format!(
            "Conversation so far:\n{}\n\n{message}",
            conversation::format_messages(log.messages())
        )),
    }
}
