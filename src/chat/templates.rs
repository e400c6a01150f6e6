//! Canned replies used when the remote provider cannot answer.

use crate::chat::topic::TopicLabel;

/// Bot reply for a round trip that failed outright.
pub const APOLOGY: &str = "Sorry, something went wrong. Please try again later.";

const CAREER_PATH: &str = "Based on current market trends, I recommend exploring these high-growth fields:

1. Data Science & AI - Average salary: $120,000/year
2. Healthcare Technology - Average salary: $95,000/year
3. Sustainable Energy - Average salary: $105,000/year
4. Cybersecurity - Average salary: $110,000/year
5. Digital Marketing - Average salary: $85,000/year

Would you like me to analyze which of these aligns best with your skills?";

const SKILL_ASSESSMENT: &str = "I can help assess your skills through these methods:

1. Quick Self-Assessment: Answer 10 questions about your preferences and experiences
2. Resume Analysis: Upload your resume for AI-powered skill extraction
3. Comprehensive Assessment: Complete a 30-minute evaluation covering technical and soft skills

Which approach would you prefer to start with?";

const RESUME_HELP: &str = "I can analyze your resume to provide personalized career insights:

• Identify your key skills and experience level
• Suggest skills you should highlight based on target roles
• Recommend improvements to match industry standards
• Compare your profile to successful professionals in your field

Would you like to upload your resume now for analysis?";

const INTERVIEW_PREP: &str = "Here are my top interview preparation tips:

1. Research the company thoroughly (culture, recent news, products)
2. Prepare specific examples using the STAR method (Situation, Task, Action, Result)
3. Practice these common questions:
   - \"Tell me about a challenge you overcame\"
   - \"Why do you want to work here?\"
   - \"Where do you see yourself in 5 years?\"
4. Prepare 3-5 thoughtful questions to ask the interviewer

Would you like me to provide tailored interview questions for a specific role?";

const SALARY_INFO: &str = "When negotiating salary, consider these data-driven strategies:

• The average professional can increase their offer by 10-15% through negotiation
• Research shows Tuesday is the optimal day to negotiate (decision fatigue is lower)
• Focus on your unique value proposition rather than personal needs
• Consider the total compensation package (benefits, flexibility, growth)

What specific role are you negotiating for? I can provide industry-specific salary benchmarks.";

const EDUCATION: &str = "Based on current employer preferences, here are the most valuable credentials:

1. Technical Certifications: AWS, Google Cloud, Azure (94% employer recognition)
2. Data Analysis: SQL, Python, R, Tableau (87% employer demand)
3. Project Management: PMP, Agile, Scrum (82% employer value)
4. Soft Skills: Leadership, communication workshops (76% employer interest)

What specific field are you looking to upskill in?";

const NETWORKING: &str = "Strategic networking significantly impacts career growth. Consider these approaches:

• Quality over quantity: Research shows meaningful connections with 5-7 industry professionals is more valuable than 100+ surface-level connections
• Engage in industry-specific online communities (Slack groups, Discord servers, Reddit)
• Set a goal to have one informational interview per month
• Create and share valuable content in your area of expertise

Would you like specific networking strategies for your industry?";

const WORK_LIFE_BALANCE: &str = "Based on research from top companies with high employee satisfaction:

• Regular breaks increase productivity by 28% (take 5-10 minute breaks every hour)
• Setting clear boundaries between work and personal time reduces burnout by 43%
• Flexible work arrangements improve job satisfaction by 65%
• Prioritizing tasks using the Eisenhower Matrix can reduce stress by 31%

Would you like personalized strategies for improving your work-life balance?";

const CAREER_CHANGE: &str = "Career transitions are increasingly common, with the average professional making 5-7 career changes in their lifetime. For a successful transition:

1. Identify transferable skills from your current role
2. Research skill gaps for your target field
3. Create a strategic upskilling plan (courses, certifications, projects)
4. Develop a compelling career change narrative
5. Build a network in your target industry before making the switch

What field are you considering transitioning to?";

const JOB_SEARCH: &str = "To optimize your job search in today's market:

• 70% of positions are filled through networking rather than job boards
• Tailoring your resume for each application increases interview chances by 61%
• Following up within 48 hours after applying boosts response rates by 42%
• Tuesday mornings (9-11am) are statistically the best time to submit applications

Would you like a personalized job search strategy based on your target role?";

const GENERAL: &str = "I'm your AI-powered career assistant with access to:

• Labor market data across 500+ industries
• Skill requirements for 10,000+ job roles
• Salary benchmarks updated quarterly
• Career progression patterns from millions of professionals

To provide the most relevant guidance, could you share more about your current career situation or specific questions?";

/// Canned reply text for a topic label.
pub fn template(label: TopicLabel) -> &'static str {
    match label {
        TopicLabel::CareerPath => CAREER_PATH,
        TopicLabel::SkillAssessment => SKILL_ASSESSMENT,
        TopicLabel::ResumeHelp => RESUME_HELP,
        TopicLabel::InterviewPrep => INTERVIEW_PREP,
        TopicLabel::SalaryInfo => SALARY_INFO,
        TopicLabel::Education => EDUCATION,
        TopicLabel::Networking => NETWORKING,
        TopicLabel::WorkLifeBalance => WORK_LIFE_BALANCE,
        TopicLabel::CareerChange => CAREER_CHANGE,
        TopicLabel::JobSearch => JOB_SEARCH,
        TopicLabel::General => GENERAL,
    }
}
