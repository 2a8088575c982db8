//! Action-specific instruction sets and prompt templates.
//!
//! All action-specific behavior lives in this table; the orchestration
//! service runs one generic flow and asks here for the right agent
//! configuration and prompt.

use crate::config::{AgentConfig, ConversationConfig};
use crate::domain::{Action, ExtractedDocument};
use crate::ports::AgentInvocation;

/// Fixed text the QA agent replies with when the answer is not in the document.
pub const QA_FALLBACK_MESSAGE: &str =
    "I'm sorry, but I couldn't find the answer to your question in the provided PDF document.";

const QA_AGENT_NAME: &str = "PDF-Only QA Agent";
const SUMMARY_AGENT_NAME: &str = "Summarizer";
const QUESTION_GEN_AGENT_NAME: &str = "QuestionGenerator";

const QA_AGENT_ROLE: &str = "Answer user questions using only the content of a specific PDF file.";
const SUMMARY_AGENT_ROLE: &str = "PDF summarizer";
const QUESTION_GEN_AGENT_ROLE: &str = "PDF educational assistant";

/// Tunables the prompt table needs, copied out of the application config.
#[derive(Debug, Clone)]
pub struct PromptSettings {
    pub model_id: String,
    pub summary_min_words: u32,
    pub question_count: u32,
}

impl PromptSettings {
    pub fn new(agent: &AgentConfig, conversation: &ConversationConfig) -> Self {
        Self {
            model_id: agent.model_id.clone(),
            summary_min_words: conversation.summary_min_words,
            question_count: conversation.question_count,
        }
    }
}

/// Builds the agent invocation and prompt for one action over one document.
pub fn build(
    action: Action,
    document: &ExtractedDocument,
    question: Option<&str>,
    settings: &PromptSettings,
) -> (AgentInvocation, String) {
    match action {
        Action::QuestionAnswer => question_answer(document, question.unwrap_or_default(), settings),
        Action::Summarizer => summarize(document, settings),
        Action::GenerateQuestions => generate_questions(document, settings),
    }
}

fn question_answer(
    document: &ExtractedDocument,
    question: &str,
    settings: &PromptSettings,
) -> (AgentInvocation, String) {
    let invocation = AgentInvocation::new(QA_AGENT_NAME, &settings.model_id)
        .with_description("Answers questions using only the content of a specific PDF document.")
        .with_role(QA_AGENT_ROLE)
        .with_instruction("Answer using only the provided PDF content.")
        .with_instruction("Do not use external knowledge, inference, or assumptions.")
        .with_instruction(format!(
            "If the answer cannot be found, say: '{}'",
            QA_FALLBACK_MESSAGE
        ));

    let prompt = format!(
        "You are an AI assistant that answers questions using **only** the following PDF \
         content. Do not use external knowledge, inference, or assumptions. If the answer \
         cannot be found, say: '{}'\n\n\
         === PDF CONTENT START ===\n{}\n=== PDF CONTENT END ===\n\n\
         Question: {}",
        QA_FALLBACK_MESSAGE, document.text, question
    );

    (invocation, prompt)
}

fn summarize(document: &ExtractedDocument, settings: &PromptSettings) -> (AgentInvocation, String) {
    let min_words = settings.summary_min_words;
    let invocation = AgentInvocation::new(SUMMARY_AGENT_NAME, &settings.model_id)
        .with_description(format!(
            "Summarizes a PDF document in a minimum of {} words.",
            min_words
        ))
        .with_role(SUMMARY_AGENT_ROLE)
        .with_instruction(format!(
            "Provide a clear, structured summary with at least {} words.",
            min_words
        ))
        .with_instruction("Use headings and bullet points where appropriate.");

    let prompt = format!(
        "You are a professional summarizer AI. Summarize the following academic content in \
         **at least {} words**. Ensure clarity, depth, and structure with sections, bullet \
         points, and examples if relevant.\n\n{}",
        min_words, document.text
    );

    (invocation, prompt)
}

fn generate_questions(
    document: &ExtractedDocument,
    settings: &PromptSettings,
) -> (AgentInvocation, String) {
    let count = settings.question_count;
    let invocation = AgentInvocation::new(QUESTION_GEN_AGENT_NAME, &settings.model_id)
        .with_description("Generates questions with Number and highlights key points from academic text.")
        .with_role(QUESTION_GEN_AGENT_ROLE)
        .with_instruction(format!("Generate {} questions based on the input text.", count))
        .with_instruction("Identify the most important point from the text.");

    let prompt = format!(
        "You are an educational assistant. Based on the following academic text:\n\n{}\n\n\
         Please do the following:\n\
         1. Generate {} thoughtful and relevant questions that test understanding of the content.\n\
         2. Highlight the most important concept or point from the text.",
        document.text, count
    );

    (invocation, prompt)
}
