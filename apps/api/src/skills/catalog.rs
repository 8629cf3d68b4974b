//! Static industry-skills catalog: per-path required skills with a 0-5
//! proficiency weight and curated learning resources. Paths without
//! catalog coverage fall back to the LLM analyzer.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Resource {
    pub name: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct IndustrySkill {
    pub name: &'static str,
    /// Required proficiency, 0-5.
    pub weight: u8,
    pub resources: Vec<Resource>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillCategory {
    pub category: &'static str,
    pub skills: Vec<IndustrySkill>,
}

fn skill(name: &'static str, weight: u8, resources: &[(&'static str, &'static str)]) -> IndustrySkill {
    IndustrySkill {
        name,
        weight,
        resources: resources
            .iter()
            .map(|&(name, url)| Resource { name, url })
            .collect(),
    }
}

/// Industry skill requirements for a career path, grouped by category.
/// Returns `None` for paths the catalog does not cover.
pub fn industry_skills(career_path: &str) -> Option<Vec<SkillCategory>> {
    match crate::recommendation::market::canonical_path(career_path)? {
        "Software Development" => Some(vec![
            SkillCategory {
                category: "Technical",
                skills: vec![
                    skill("Modern JavaScript (ES6+)", 4, &[
                        ("JavaScript.info", "https://javascript.info/"),
                        ("MDN Web Docs", "https://developer.mozilla.org/en-US/docs/Web/JavaScript"),
                    ]),
                    skill("React/Angular/Vue.js", 4, &[
                        ("React - The Complete Guide", "https://www.udemy.com/course/react-the-complete-guide-incl-redux/"),
                        ("Angular Tutorial", "https://angular.io/tutorial"),
                    ]),
                    skill("Node.js", 3, &[
                        ("Node.js Complete Guide", "https://www.udemy.com/course/nodejs-the-complete-guide/"),
                        ("Node.js Documentation", "https://nodejs.org/en/docs/"),
                    ]),
                    skill("Cloud Services (AWS/Azure/GCP)", 4, &[
                        ("AWS Certified Developer", "https://www.udemy.com/course/aws-certified-developer-associate/"),
                        ("Azure Fundamentals", "https://learn.microsoft.com/en-us/training/azure/"),
                    ]),
                    skill("Docker & Kubernetes", 3, &[
                        ("Docker & Kubernetes Course", "https://www.udemy.com/course/docker-and-kubernetes-the-complete-guide/"),
                        ("Kubernetes Documentation", "https://kubernetes.io/docs/home/"),
                    ]),
                ],
            },
            SkillCategory {
                category: "Tools",
                skills: vec![
                    skill("Git & GitHub", 5, &[
                        ("Git Complete Guide", "https://www.udemy.com/course/git-complete/"),
                        ("GitHub Learning Lab", "https://lab.github.com/"),
                    ]),
                    skill("VS Code/Modern IDEs", 4, &[
                        ("VS Code Tutorial", "https://code.visualstudio.com/docs"),
                    ]),
                    skill("Testing Frameworks", 4, &[
                        ("JavaScript Testing Course", "https://www.udemy.com/course/javascript-unit-testing-the-practical-guide/"),
                        ("Jest Documentation", "https://jestjs.io/docs/getting-started"),
                    ]),
                ],
            },
            SkillCategory {
                category: "Soft Skills",
                skills: vec![
                    skill("Agile Methodologies", 4, &[
                        ("Agile Fundamentals", "https://www.coursera.org/learn/agile-fundamentals"),
                        ("Scrum Guide", "https://scrumguides.org/"),
                    ]),
                    skill("Technical Communication", 5, &[
                        ("Google Technical Writing", "https://developers.google.com/tech-writing"),
                    ]),
                    skill("Problem-Solving", 5, &[
                        ("LeetCode Problems", "https://leetcode.com/problemset/all/"),
                        ("HackerRank Challenges", "https://www.hackerrank.com/domains/algorithms"),
                    ]),
                ],
            },
        ]),
        "Data Science" => Some(vec![
            SkillCategory {
                category: "Technical",
                skills: vec![
                    skill("Python for Data Science", 5, &[
                        ("Python for Data Science", "https://www.udemy.com/course/python-for-data-science-and-machine-learning-bootcamp/"),
                        ("DataCamp Python Track", "https://www.datacamp.com/tracks/python-programmer"),
                    ]),
                    skill("Machine Learning", 4, &[
                        ("Machine Learning A-Z", "https://www.udemy.com/course/machinelearning/"),
                        ("Stanford ML Course", "https://www.coursera.org/learn/machine-learning"),
                    ]),
                    skill("Deep Learning", 3, &[
                        ("Deep Learning Specialization", "https://www.coursera.org/specializations/deep-learning"),
                        ("Fast.ai Course", "https://www.fast.ai/"),
                    ]),
                    skill("Statistical Analysis", 4, &[
                        ("Statistics for Data Science", "https://www.coursera.org/specializations/statistics"),
                        ("Khan Academy Statistics", "https://www.khanacademy.org/math/statistics-probability"),
                    ]),
                ],
            },
            SkillCategory {
                category: "Tools",
                skills: vec![
                    skill("SQL & Databases", 5, &[
                        ("Complete SQL Bootcamp", "https://www.udemy.com/course/the-complete-sql-bootcamp/"),
                        ("Mode SQL Tutorial", "https://mode.com/sql-tutorial/"),
                    ]),
                    skill("Jupyter & Data Tools", 4, &[
                        ("Jupyter Tutorial", "https://jupyter.org/try"),
                        ("Pandas Documentation", "https://pandas.pydata.org/docs/"),
                    ]),
                    skill("Visualization Tools", 4, &[
                        ("Data Visualization Course", "https://www.coursera.org/learn/data-visualization"),
                        ("Tableau Training", "https://www.tableau.com/learn/training"),
                    ]),
                ],
            },
            SkillCategory {
                category: "Soft Skills",
                skills: vec![
                    skill("Data Storytelling", 4, &[
                        ("Storytelling with Data", "https://www.storytellingwithdata.com/"),
                    ]),
                    skill("Business Acumen", 4, &[
                        ("Business Analytics", "https://www.coursera.org/specializations/business-analytics"),
                    ]),
                    skill("Research Methodology", 3, &[
                        ("Research Methods Course", "https://www.coursera.org/learn/research-methods"),
                    ]),
                ],
            },
        ]),
        _ => None,
    }
}
