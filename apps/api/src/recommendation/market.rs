//! Static job-market catalog, keyed by career-path name.
//!
//! This is reference data for the presentation layer: growth and demand
//! indicators, a six-month posting trend, and per-path skill and role
//! summaries. It is not consulted by the model prompts and carries no
//! freshness guarantee beyond its snapshot date.

use serde::Serialize;

/// Market indicators for one career path.
#[derive(Debug, Clone, Serialize)]
pub struct MarketSnapshot {
    pub career_path: &'static str,
    /// Projected growth over the next five years, percent.
    pub growth_rate_pct: u8,
    /// Relative demand indicator, 0-100.
    pub demand_score: u8,
    /// Typical starting salary, INR per year.
    pub min_salary_inr: u32,
    pub trending_skills: Vec<&'static str>,
    /// Monthly posting counts, oldest first.
    pub job_postings_trend: [u32; 6],
}

/// Qualitative details for one career path.
#[derive(Debug, Clone, Serialize)]
pub struct CareerPathInfo {
    pub skills: Vec<&'static str>,
    pub opportunities: Vec<&'static str>,
    pub market_trends: &'static str,
}

/// Canonical path names the catalog knows about.
pub const TECHNICAL_PATHS: &[&str] = &[
    "Software Development",
    "Data Science",
    "Machine Learning Engineering",
    "DevOps Engineering",
    "Data Analytics",
    "Cybersecurity",
    "UI/UX Design",
];

pub const NON_TECHNICAL_PATHS: &[&str] = &[
    "Digital Marketing",
    "Product Management",
    "Business Analysis",
    "Technical Writing",
    "IT Project Management",
    "IT Sales & Business Development",
];

/// Resolves a user- or model-supplied path name to its canonical catalog
/// name, ignoring case.
pub fn canonical_path(name: &str) -> Option<&'static str> {
    TECHNICAL_PATHS
        .iter()
        .chain(NON_TECHNICAL_PATHS.iter())
        .find(|p| p.eq_ignore_ascii_case(name.trim()))
        .copied()
}

pub fn market_snapshot(name: &str) -> Option<MarketSnapshot> {
    let path = canonical_path(name)?;
    let (growth, demand, salary, skills, trend) = match path {
        "Software Development" => (
            25,
            85,
            500_000,
            vec!["Python", "JavaScript", "Cloud Computing", "DevOps"],
            [1200, 1350, 1500, 1800, 2100, 2400],
        ),
        "Data Science" => (
            28,
            90,
            600_000,
            vec!["Python", "Machine Learning", "SQL", "Deep Learning"],
            [800, 1000, 1300, 1600, 2000, 2500],
        ),
        "Machine Learning Engineering" => (
            30,
            88,
            700_000,
            vec!["TensorFlow", "PyTorch", "Computer Vision", "NLP"],
            [600, 800, 1100, 1500, 1900, 2300],
        ),
        "DevOps Engineering" => (
            22,
            82,
            600_000,
            vec!["Docker", "Kubernetes", "AWS", "CI/CD"],
            [900, 1100, 1400, 1700, 2000, 2200],
        ),
        "Data Analytics" => (
            23,
            80,
            450_000,
            vec!["SQL", "Python", "Tableau", "Power BI"],
            [1000, 1200, 1400, 1600, 1800, 2000],
        ),
        "Cybersecurity" => (
            32,
            92,
            550_000,
            vec![
                "Network Security",
                "Ethical Hacking",
                "Security Tools",
                "Risk Assessment",
            ],
            [900, 1100, 1400, 1800, 2200, 2600],
        ),
        "UI/UX Design" => (
            24,
            84,
            450_000,
            vec!["Figma", "User Research", "Wireframing", "Design Systems"],
            [800, 1000, 1200, 1500, 1800, 2100],
        ),
        "Digital Marketing" => (
            20,
            78,
            400_000,
            vec!["SEO", "Social Media", "Content Strategy", "Analytics"],
            [1100, 1300, 1500, 1700, 1900, 2100],
        ),
        "Product Management" => (
            27,
            86,
            800_000,
            vec!["Agile", "Product Strategy", "User Stories", "Roadmapping"],
            [700, 900, 1200, 1500, 1800, 2200],
        ),
        "Business Analysis" => (
            21,
            79,
            450_000,
            vec![
                "Requirements Gathering",
                "Process Modeling",
                "Data Analysis",
                "Stakeholder Management",
            ],
            [800, 1000, 1200, 1400, 1600, 1900],
        ),
        "Technical Writing" => (
            18,
            75,
            400_000,
            vec![
                "Documentation",
                "API Writing",
                "Content Management",
                "Information Architecture",
            ],
            [500, 600, 800, 1000, 1200, 1400],
        ),
        "IT Project Management" => (
            24,
            83,
            700_000,
            vec![
                "Project Planning",
                "Risk Management",
                "Team Leadership",
                "Budgeting",
            ],
            [900, 1100, 1300, 1600, 1900, 2200],
        ),
        "IT Sales & Business Development" => (
            19,
            77,
            450_000,
            vec![
                "Solution Selling",
                "CRM",
                "Relationship Building",
                "Technical Knowledge",
            ],
            [700, 900, 1100, 1300, 1500, 1800],
        ),
        _ => return None,
    };
    Some(MarketSnapshot {
        career_path: path,
        growth_rate_pct: growth,
        demand_score: demand,
        min_salary_inr: salary,
        trending_skills: skills,
        job_postings_trend: trend,
    })
}

pub fn path_info(name: &str) -> Option<CareerPathInfo> {
    let path = canonical_path(name)?;
    let (skills, opportunities, market_trends) = match path {
        "Software Development" => (
            vec![
                "Programming Languages (Python, Java, JavaScript)",
                "Web Development",
                "Database Management",
                "Version Control",
                "Software Architecture",
            ],
            vec![
                "Full-stack Developer",
                "Backend Developer",
                "Mobile App Developer",
                "Cloud Solutions Engineer",
                "DevOps Engineer",
            ],
            "High demand with 25% growth expected over next 5 years",
        ),
        "Data Science" => (
            vec![
                "Python",
                "Statistics",
                "Machine Learning",
                "Data Visualization",
                "Big Data Technologies",
            ],
            vec![
                "Data Scientist",
                "Machine Learning Engineer",
                "AI Researcher",
                "Business Intelligence Analyst",
                "Quantitative Analyst",
            ],
            "Rapidly growing field with 28% projected growth",
        ),
        "Machine Learning Engineering" => (
            vec![
                "Deep Learning",
                "NLP",
                "Computer Vision",
                "Python",
                "Model Deployment",
                "MLOps",
            ],
            vec![
                "ML Engineer",
                "AI Developer",
                "Research Scientist",
                "Computer Vision Engineer",
                "NLP Engineer",
            ],
            "Explosive growth with 30% increase in demand annually",
        ),
        "DevOps Engineering" => (
            vec![
                "Cloud Platforms",
                "CI/CD",
                "Container Orchestration",
                "Infrastructure as Code",
                "Monitoring Tools",
            ],
            vec![
                "DevOps Engineer",
                "Site Reliability Engineer",
                "Cloud Engineer",
                "Platform Engineer",
                "Infrastructure Engineer",
            ],
            "Strong demand with 22% growth in job openings",
        ),
        "Data Analytics" => (
            vec![
                "SQL",
                "Data Visualization",
                "Statistical Analysis",
                "Excel",
                "Business Intelligence Tools",
            ],
            vec![
                "Data Analyst",
                "Business Intelligence Developer",
                "Marketing Analyst",
                "Financial Analyst",
                "Operations Analyst",
            ],
            "Steady growth with 23% increase in opportunities",
        ),
        "Cybersecurity" => (
            vec![
                "Network Security",
                "Ethical Hacking",
                "Security Tools",
                "Risk Assessment",
                "Incident Response",
            ],
            vec![
                "Security Engineer",
                "Penetration Tester",
                "Security Analyst",
                "Security Consultant",
                "Security Architect",
            ],
            "Critical growth area with 32% increase in demand",
        ),
        "UI/UX Design" => (
            vec![
                "User Research",
                "Wireframing",
                "Prototyping",
                "Visual Design",
                "Design Systems",
            ],
            vec![
                "UI Designer",
                "UX Designer",
                "Product Designer",
                "Interaction Designer",
                "Design System Specialist",
            ],
            "Growing demand with 24% increase in opportunities",
        ),
        "Digital Marketing" => (
            vec![
                "SEO",
                "Social Media Marketing",
                "Content Strategy",
                "Analytics",
                "Email Marketing",
            ],
            vec![
                "Digital Marketing Manager",
                "SEO Specialist",
                "Content Strategist",
                "Social Media Manager",
                "Marketing Analyst",
            ],
            "Steady growth with 20% increase in roles",
        ),
        "Product Management" => (
            vec![
                "Product Strategy",
                "User Stories",
                "Agile Methodologies",
                "Data Analysis",
                "Stakeholder Management",
            ],
            vec![
                "Product Manager",
                "Product Owner",
                "Technical Product Manager",
                "Growth Product Manager",
                "Senior Product Manager",
            ],
            "High demand with 27% growth in opportunities",
        ),
        "Business Analysis" => (
            vec![
                "Requirements Gathering",
                "Process Modeling",
                "Data Analysis",
                "Documentation",
                "Stakeholder Management",
            ],
            vec![
                "Business Analyst",
                "Systems Analyst",
                "Process Analyst",
                "Agile Business Analyst",
                "Senior Business Analyst",
            ],
            "Stable growth with 21% increase in positions",
        ),
        "Technical Writing" => (
            vec![
                "Documentation",
                "API Writing",
                "Information Architecture",
                "Content Management",
                "Research",
            ],
            vec![
                "Technical Writer",
                "Documentation Specialist",
                "API Documentation Writer",
                "Content Developer",
                "Knowledge Base Manager",
            ],
            "Steady demand with 18% growth expected",
        ),
        "IT Project Management" => (
            vec![
                "Project Planning",
                "Risk Management",
                "Agile/Scrum",
                "Budgeting",
                "Team Leadership",
            ],
            vec![
                "IT Project Manager",
                "Program Manager",
                "Scrum Master",
                "Delivery Manager",
                "Technical Project Lead",
            ],
            "Strong growth with 24% increase in demand",
        ),
        "IT Sales & Business Development" => (
            vec![
                "Solution Selling",
                "Relationship Building",
                "Technical Knowledge",
                "CRM",
                "Negotiation",
            ],
            vec![
                "Technical Sales Manager",
                "Solutions Consultant",
                "Business Development Manager",
                "Account Executive",
                "Sales Engineer",
            ],
            "Consistent growth with 19% increase in opportunities",
        ),
        _ => return None,
    };
    Some(CareerPathInfo {
        skills,
        opportunities,
        market_trends,
    })
}
