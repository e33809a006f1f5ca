use crate::models::{Budget, Category, CompanySize, LeadSubmission, QualificationResult, Timeline};

const BASE_SCORE: i32 = 50;

/// Qualify a lead. Pure and total: every well-formed submission produces a
/// result, and identical input always yields identical output.
pub fn qualify(lead: &LeadSubmission) -> QualificationResult {
    let budget = Budget::from_str(&lead.budget);
    let timeline = Timeline::from_str(&lead.timeline);
    let size = CompanySize::from_str(&lead.company_size);

    let mut score = BASE_SCORE;
    score += budget.score_delta();
    score += timeline.score_delta();
    score += size.score_delta();

    // Engagement signals
    if !lead.phone.is_empty() {
        score += 5;
    }
    if !lead.current_solution.is_empty() {
        score += 5;
    }
    let needs_len = lead.needs.chars().count();
    if needs_len > 100 {
        score += 5;
    }
    if needs_len > 200 {
        score += 5;
    }

    let score = score.clamp(0, 100);
    let category = Category::from_score(score);

    QualificationResult {
        score,
        category,
        analysis: analysis(lead, category, timeline),
        recommendations: recommendations(lead, category),
        urgency: timeline.urgency().to_string(),
    }
}

fn analysis(lead: &LeadSubmission, category: Category, timeline: Timeline) -> String {
    let mut sentences: Vec<String> = Vec::new();

    match category {
        Category::Hot => {
            sentences.push(format!(
                "{} shows strong buying signals.",
                lead.company_name
            ));
            if timeline == Timeline::Immediate {
                sentences.push("They need a solution urgently.".to_string());
            }
            if !lead.budget.is_empty() {
                sentences.push(format!(
                    "Budget range of {} indicates serious intent.",
                    lead.budget
                ));
            }
            sentences.push("This lead should be prioritized for immediate follow-up.".to_string());
        }
        Category::Warm => {
            sentences.push(format!(
                "{} is a promising lead with moderate buying intent.",
                lead.company_name
            ));
            if !lead.company_size.is_empty() {
                sentences.push(format!(
                    "As a {} employee company, they have potential for growth.",
                    lead.company_size
                ));
            }
            sentences.push("Consider nurturing this lead with targeted content.".to_string());
        }
        Category::Cold => {
            sentences.push(format!("{} is in early exploration phase.", lead.company_name));
            if timeline == Timeline::Exploring {
                sentences.push("They are still researching options.".to_string());
            }
            sentences.push("Add to nurture campaign and follow up in 2-4 weeks.".to_string());
        }
    }

    sentences.join(" ")
}

fn recommendations(lead: &LeadSubmission, category: Category) -> Vec<String> {
    let mut recs: Vec<String> = Vec::new();

    match category {
        Category::Hot => {
            recs.push("Schedule a demo call within 24 hours".to_string());
            recs.push("Send personalized proposal based on their needs".to_string());
            if !lead.current_solution.is_empty() {
                recs.push(format!(
                    "Prepare competitive analysis vs {}",
                    lead.current_solution
                ));
            }
            recs.push("Assign to senior sales representative".to_string());
        }
        Category::Warm => {
            recs.push("Send case study relevant to their industry".to_string());
            recs.push("Schedule discovery call within 3-5 days".to_string());
            recs.push("Add to email nurture sequence".to_string());
            if lead.budget.is_empty() {
                recs.push("Qualify budget in next conversation".to_string());
            }
        }
        Category::Cold => {
            recs.push("Add to long-term nurture campaign".to_string());
            recs.push("Send educational content about your solution".to_string());
            recs.push("Set reminder to follow up in 30 days".to_string());
            recs.push("Consider webinar invitation".to_string());
        }
    }

    recs
}
