// Prompt templates and fixed user-facing messages for each panel.
// Templates use `{name}` placeholders, filled with `str::replace` before sending.

/// Resume review. Replace `{resume}`.
pub const RESUME_PROMPT_TEMPLATE: &str = "Act as a senior technical recruiter. \
    Review this resume and provide 5 specific improvements, focusing on impact, keywords, \
    and formatting. Resume text:\n\n{resume}";

/// Interview Q&A. Replace `{category}` and `{question}`.
pub const INTERVIEW_PROMPT_TEMPLATE: &str = "Give a professional, structured answer for a \
    {category} interview question. Use the STAR method if applicable. Question: {question}";

/// Aptitude problem generation. Sent as-is.
pub const NEW_PROBLEM_PROMPT: &str = "Generate a challenging quantitative aptitude or logical \
    reasoning problem (with options) common in tech company placement tests.";

/// Solution check. Replace `{problem}` and `{solution}`.
pub const CHECK_SOLUTION_PROMPT_TEMPLATE: &str = "Context: {problem}\n\n\
    The student solved it as follows: {solution}. Check if this is correct, explain the logic, \
    and give a faster tip/short-cut if possible.";

/// Project explanation coaching. Replace `{project}`.
pub const PROJECT_PROMPT_TEMPLATE: &str = "I have this project: {project}. \
    Help me explain it to an interviewer in 2 minutes. Focus on: Problem solved, \
    Tech stack choice, Personal contribution, and One challenging obstacle overcome.";

pub const RESUME_BLANK: &str = "Please paste your resume text above.";
pub const QUESTION_BLANK: &str = "Please type a question.";
pub const SOLUTION_BLANK: &str = "Write your solution above to get feedback.";
pub const PROJECT_BLANK: &str = "Provide a brief description of your project.";

pub const THINKING: &str = "Thinking...";
pub const UNREACHABLE: &str =
    "Failed to contact AI service. Make sure the server is running on port 3001.";
