//! Static page content.
//!
//! Everything here is presentation copy. [`Site::default`] holds the copy
//! rendered by both page variants.

use chrono::Datelike;
use serde::Serialize;

/// An external link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

impl Link {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Who the page is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: String,
    /// Short brand shown at the left of the header.
    pub initials: String,
    pub tagline: String,
    pub focus: Vec<String>,
    pub about: Vec<String>,
    pub github: Link,
    pub linkedin: Link,
}

/// One project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub link: Link,
}

impl Project {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        tags: &[&str],
        link: Link,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            link,
        }
    }
}

/// Everything the page renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Site {
    pub profile: Profile,
    pub projects: Vec<Project>,
    /// Year shown in the footer.
    pub year: i32,
}

impl Site {
    /// Replaces the footer year.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }
}

const GITHUB: &str = "https://github.com/saivimenthanvl-ai";
const LINKEDIN: &str = "https://www.linkedin.com/in/sai-vimenthan-b432b537b/";

impl Default for Site {
    fn default() -> Self {
        let profile = Profile {
            name: "Sai Vimenthan".into(),
            initials: "SV".into(),
            tagline: "LLM developer, and builder of useful things.".into(),
            focus: vec![
                "Large Language Models (GPT\u{2011}2)".into(),
                "React front end".into(),
                "Productizing ML experiments".into(),
            ],
            about: vec![
                "Aspiring Fresher recently graduated in Computer Science at Sri Ramachandra \
                 Institute of Higher Education and Research. I\u{2019}ve worked across web \
                 development, machine learning, optical character recognition (OCR), deep \
                 learning, and large language model (LLM) development."
                    .into(),
                "Skilled in Python, Java, HTML, CSS, JavaScript, C Programming, and MySQL. \
                 I apply my skills to real-world projects in document automation, computer \
                 vision, and AI-based solutions."
                    .into(),
                "Passionate about using AI/ML and modern development practices to build \
                 innovative, scalable, and user\u{2011}friendly applications."
                    .into(),
            ],
            github: Link::new("GitHub", GITHUB),
            linkedin: Link::new("LinkedIn", LINKEDIN),
        };

        let projects = vec![
            Project::new(
                "Monkeypox Classification",
                "Research on automated classification of Monkeypox using computer vision and \
                 deep learning techniques. Implemented models for early detection from medical \
                 images.",
                &["Research", "Computer Vision", "Deep Learning"],
                Link::new(
                    "View Research Paper",
                    format!("{GITHUB}/Monkeypox-Classification"),
                ),
            ),
            Project::new(
                "LLM Language Modeling",
                "Developed and experimented with LLMs (incl. GPT-2) \u{2014} fine-tuning, data \
                 preparation, and optimization for domain-specific text generation.",
                &["LLM", "PyTorch", "NLP"],
                Link::new("View Code", format!("{GITHUB}/LLM")),
            ),
            Project::new(
                "Farmculture",
                "Agriculture-focused data analysis and insights. Built with modern data science \
                 tooling to provide actionable recommendations for farming practices.",
                &["Agriculture", "Data Analysis", "Jupyter"],
                Link::new("View Project", format!("{GITHUB}/Farmculture")),
            ),
            Project::new(
                "Computer Vision & ML Projects",
                "A collection of ML/CV projects \u{2014} image classification, object detection, \
                 and pattern recognition with practical applications.",
                &["Machine Learning", "Computer Vision", "Research"],
                Link::new("View Portfolio", GITHUB),
            ),
        ];

        Self {
            profile,
            projects,
            year: chrono::Local::now().year(),
        }
    }
}
