//! Static technical question bank and stack-driven question selection.

/// Upper bound on the question set shown to a candidate.
pub const MAX_QUESTIONS: usize = 5;
/// Questions taken from each recognised technology.
pub const QUESTIONS_PER_TECH: usize = 2;

/// Used when none of the candidate's tokens is in the bank.
pub const FALLBACK_QUESTIONS: [&str; 2] = [
    "Walk me through a recent project that best shows your expertise in this stack.",
    "What trade-offs did you consider when choosing these tools?",
];

/// Technology token → canned questions, in bank order.
pub const QUESTION_BANK: &[(&str, &[&str])] = &[
    (
        "python",
        &[
            "Explain list vs tuple trade-offs.",
            "How do you manage virtual environments and dependencies?",
            "Describe a time you optimized Python code for performance.",
        ],
    ),
    (
        "django",
        &[
            "How do middleware and signals differ?",
            "When would you use select_related vs prefetch_related?",
        ],
    ),
    (
        "flask",
        &[
            "How do you structure a large Flask app with blueprints?",
            "Explain Flask's application and request context.",
        ],
    ),
    (
        "fastapi",
        &[
            "How does dependency injection work in FastAPI?",
            "Explain async endpoints vs sync endpoints performance.",
        ],
    ),
    (
        "react",
        &[
            "How do you handle state normalization across complex components?",
            "What are the trade-offs between context and Redux?",
        ],
    ),
    (
        "javascript",
        &[
            "Explain closures and where you'd use them.",
            "How does the event loop differ between browser and Node?",
        ],
    ),
    (
        "typescript",
        &[
            "How do you use generics to create reusable components?",
            "Explain utility types like Partial, Pick, and Omit.",
        ],
    ),
    (
        "node",
        &[
            "How do you manage async error handling in Express?",
            "Explain event loop phases relevant to timers and I/O callbacks.",
        ],
    ),
    (
        "java",
        &[
            "Explain the difference between checked and unchecked exceptions.",
            "How does the JVM garbage collector work at a high level?",
        ],
    ),
    (
        "spring",
        &[
            "How does dependency injection work in Spring Boot?",
            "Explain the request lifecycle in a Spring MVC app.",
        ],
    ),
    (
        "sql",
        &[
            "How do you detect and fix N+1 query issues?",
            "Describe how you would design indexes for a write-heavy table.",
        ],
    ),
    (
        "postgresql",
        &[
            "When would you use JSONB vs a normalized schema?",
            "Explain MVCC and its impact on concurrent transactions.",
        ],
    ),
    (
        "mongodb",
        &[
            "How do you design schemas for embedded vs referenced documents?",
            "Explain indexing strategies for large collections.",
        ],
    ),
    (
        "redis",
        &[
            "When would you use Redis Streams vs Pub/Sub?",
            "Explain data eviction policies in Redis.",
        ],
    ),
    (
        "aws",
        &[
            "Explain when to choose SQS vs SNS.",
            "How do you secure IAM roles for least privilege?",
        ],
    ),
    (
        "gcp",
        &[
            "Compare Cloud Run and GKE for a microservice.",
            "How do you design VPC Service Controls for data exfiltration protection?",
        ],
    ),
    (
        "azure",
        &[
            "Compare Azure Functions consumption vs premium plans.",
            "How do you implement managed identities for secure access?",
        ],
    ),
    (
        "docker",
        &[
            "How do you keep images small and reproducible?",
            "What is the difference between CMD and ENTRYPOINT?",
        ],
    ),
    (
        "kubernetes",
        &[
            "How do you handle pod disruption budgets in production?",
            "What signals would trigger a custom HPA policy?",
        ],
    ),
    (
        "git",
        &[
            "How do you resolve a complex merge conflict?",
            "Explain rebase vs merge and when to use each.",
        ],
    ),
];

/// Questions for one normalized token, or `None` when the bank does not know it.
pub fn questions_for(token: &str) -> Option<&'static [&'static str]> {
    QUESTION_BANK
        .iter()
        .find(|(tech, _)| *tech == token)
        .map(|(_, questions)| *questions)
}

/// Picks up to [`MAX_QUESTIONS`] questions: the first [`QUESTIONS_PER_TECH`] of each known
/// token in token order; the two [`FALLBACK_QUESTIONS`] when no token is known.
pub fn pick_questions<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    let mut picked: Vec<String> = tokens
        .iter()
        .filter_map(|t| questions_for(t.as_ref()))
        .flat_map(|qs| qs.iter().take(QUESTIONS_PER_TECH))
        .map(|q| q.to_string())
        .collect();
    if picked.is_empty() {
        picked = FALLBACK_QUESTIONS.iter().map(|q| q.to_string()).collect();
    }
    picked.truncate(MAX_QUESTIONS);
    picked
}
