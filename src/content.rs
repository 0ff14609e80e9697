//! The portfolio text that ships with the binary.
//!
//! Pure data. Link targets are slugs; `Catalog::integrity_defects` checks
//! that each one names a page in the reading order.

use crate::catalog::{
    Category, Link, PageBody, PageLinks, PageRecord, Role, Showcase, SkillGroup, TocEntry,
};
use crate::types::Page;

pub const BOOK_TITLE: &str = "My Journey";

pub fn records() -> Vec<PageRecord> {
    vec![
        cover(),
        index(),
        foreword(),
        strumspace(),
        shakespeare(),
        compiler(),
        more_projects(),
        work_experience(),
    ]
}

fn cover() -> PageRecord {
    PageRecord {
        page: Page::Cover,
        kicker: "",
        title: BOOK_TITLE,
        subtitle: None,
        folio: "",
        body: PageBody::Cover {
            monogram: "MG",
            author: "Mehul Grover",
        },
        image: None,
        source_url: None,
        links: PageLinks {
            previous: None,
            next: Some(Link::new("Open", "index")),
        },
    }
}

fn index() -> PageRecord {
    let leaf = |number: &'static str, title: &'static str, target: &'static str| TocEntry {
        number,
        title,
        subtitle: None,
        target: Some(target),
        children: Vec::new(),
    };

    PageRecord {
        page: Page::Index,
        kicker: "",
        title: "Index",
        subtitle: None,
        folio: "— i —",
        body: PageBody::Contents {
            entries: vec![
                TocEntry {
                    number: "1",
                    title: "Foreword",
                    subtitle: Some("About Me"),
                    target: Some("foreword"),
                    children: Vec::new(),
                },
                TocEntry {
                    number: "2",
                    title: "Projects",
                    subtitle: Some("Selected Works"),
                    target: None,
                    children: vec![
                        leaf("2.1", "StrumSpace", "project-strumspace"),
                        leaf("2.2", "Miniature Shakespeare LLM", "project-shakespeare"),
                        leaf("2.3", "MIPS Compiler", "project-compiler"),
                        leaf("2.4", "More Projects", "more-projects"),
                    ],
                },
                TocEntry {
                    number: "3",
                    title: "Work Experience",
                    subtitle: Some("Professional Journey"),
                    target: Some("work-experience"),
                    children: Vec::new(),
                },
            ],
        },
        image: None,
        source_url: None,
        links: PageLinks {
            previous: Some(Link::new("Cover", "cover")),
            next: Some(Link::new("Chapter One", "foreword")),
        },
    }
}

fn foreword() -> PageRecord {
    PageRecord {
        page: Page::Foreword,
        kicker: "Chapter One",
        title: "Foreword",
        subtitle: None,
        folio: "— 1 —",
        body: PageBody::Prose {
            paragraphs: vec![
                "Hi, I'm Mehul — a developer who loves turning ideas into real, working \
                 technology. I study Data Science at the University of Waterloo, and most of my \
                 work sits at the intersection of software engineering, machine learning, and \
                 thoughtful product design. I like building projects that solve real problems: \
                 from AR tools and AI-powered chatbots to financial-model automation systems and \
                 proctoring solutions used in large-scale deployments.",
                "I'm driven by a simple idea: if something can be improved with code, I want to \
                 build it. Whether it's designing full-stack apps, training ML models, or \
                 architecting systems that make workflows smoother, I approach every project \
                 with curiosity, clarity, and a high bar for execution.",
                "I've also worked at Shopify on developer productivity initiatives, contributing \
                 to tooling and internal systems that help engineers ship better software, \
                 faster. Outside work, I spend a lot of time experimenting with 3D interfaces, \
                 automation, and creative AI tools.",
                "I'm always learning, always building, and always looking for the next \
                 challenge that pushes me further.",
            ],
            skill_groups: vec![
                SkillGroup {
                    name: "Machine Learning",
                    skills: vec![
                        "Deep Learning",
                        "Computer Vision",
                        "NLP & AI Chatbots",
                        "Model Training",
                    ],
                },
                SkillGroup {
                    name: "Full-Stack Development",
                    skills: vec![
                        "React & TypeScript",
                        "Next.js & Node.js",
                        "Python & FastAPI",
                        "System Architecture",
                    ],
                },
                SkillGroup {
                    name: "Specializations",
                    skills: vec![
                        "AR/VR & 3D Interfaces",
                        "Financial Automation",
                        "Proctoring Solutions",
                        "Data Science",
                    ],
                },
            ],
        },
        image: None,
        source_url: None,
        links: PageLinks {
            previous: Some(Link::new("Index", "index")),
            next: Some(Link::new("Next Chapter", "project-strumspace")),
        },
    }
}

fn strumspace() -> PageRecord {
    PageRecord {
        page: Page::ProjectStrumspace,
        kicker: "Chapter 2.1",
        title: "StrumSpace",
        subtitle: Some("AR Guitar Training System"),
        folio: "— 2.1 —",
        body: PageBody::Project {
            description: "StrumSpace is a real-time AR guitar training system that provides live \
                 fretboard tracking with AR chord projection overlays. Using YOLOv8-powered \
                 computer vision and MediaPipe hand tracking, it detects guitar fretboards and \
                 provides real-time guidance for self-learners with stable tracking across \
                 varying lighting conditions and camera angles.",
            features: vec![
                "Live fretboard tracking using YOLOv8 object detection",
                "AR chord projection overlays for real-time guidance",
                "Real-time strum direction detection",
                "Stable tracking across lighting conditions and angles",
                "Detection → Smoothing → Coordinate Mapping → Render pipeline",
                "Real-time inference with optimized FPS performance",
            ],
            tech_stack: vec!["Python", "YOLOv8", "MediaPipe", "OpenCV", "React"],
        },
        image: Some("https://images.unsplash.com/photo-1647193022213-4e82b7553383?w=1080"),
        source_url: Some("https://github.com/LuhemRevorg/StrumSpace"),
        links: PageLinks {
            previous: Some(Link::new("Previous", "foreword")),
            next: Some(Link::new("Next", "project-shakespeare")),
        },
    }
}

fn shakespeare() -> PageRecord {
    PageRecord {
        page: Page::ProjectShakespeare,
        kicker: "Chapter 2.2",
        title: "Miniature Shakespeare LLM",
        subtitle: Some("Character-Level Language Model"),
        folio: "— 2.2 —",
        body: PageBody::Project {
            description: "A character-level LSTM language model trained on Shakespeare's complete \
                 works to generate authentic Shakespeare-style text. The project demonstrates \
                 deep learning fundamentals including RNN architecture, embeddings, training \
                 pipelines, and sequence generation with temperature-controlled sampling for \
                 creative text generation.",
            features: vec![
                "Character-level LSTM for sequence modeling",
                "Custom preprocessing with character mapping and vocab creation",
                "Embedding + LSTM + Linear layers architecture",
                "Temperature-controlled sampling for adjustable creativity",
                "Custom inference pipeline with greedy vs. sampling decoding",
                "Convergence visualization and training dynamics analysis",
            ],
            tech_stack: vec!["PyTorch", "Python", "LSTM", "NLP"],
        },
        image: Some("https://images.unsplash.com/photo-1723220217596-45d4b51e2804?w=1080"),
        source_url: Some("https://github.com/LuhemRevorg/ShakeLLM"),
        links: PageLinks {
            previous: Some(Link::new("Previous", "project-strumspace")),
            next: Some(Link::new("Next", "project-compiler")),
        },
    }
}

fn compiler() -> PageRecord {
    PageRecord {
        page: Page::ProjectCompiler,
        kicker: "Chapter 2.3",
        title: "MIPS Compiler",
        subtitle: Some("End-to-End Compiler Pipeline"),
        folio: "— 2.3 —",
        body: PageBody::Project {
            description: "A complete compiler for a MIPS-like language built for CS241, \
                 implementing the full compilation pipeline from source code to MIPS assembly. \
                 The compiler handles lexing, parsing, semantic analysis, and code generation \
                 with proper error recovery and register allocation strategies.",
            features: vec![
                "Complete scanner (tokenizer) implementation",
                "Recursive descent parser with grammar design",
                "Semantic analysis and type checking",
                "Code generation to MIPS-like assembly",
                "Error recovery mechanisms",
                "Register allocation and logical mapping",
                "AST construction and optimization",
            ],
            tech_stack: vec!["C++", "MIPS Assembly", "Compilers", "Systems"],
        },
        image: Some("https://images.unsplash.com/photo-1669023414162-5bb06bbff0ec?w=1080"),
        source_url: Some("https://github.com/LuhemRevorg/WLP4Comp"),
        links: PageLinks {
            previous: Some(Link::new("Previous", "project-shakespeare")),
            next: Some(Link::new("Next", "more-projects")),
        },
    }
}

fn more_projects() -> PageRecord {
    let item = |title: &'static str, description: &'static str| Showcase { title, description };

    PageRecord {
        page: Page::MoreProjects,
        kicker: "Chapter 2.4",
        title: "More Projects",
        subtitle: Some("A collection of additional works and explorations"),
        folio: "— 2.4 —",
        body: PageBody::Collection {
            categories: vec![
                Category {
                    name: "AI / ML",
                    items: vec![
                        item(
                            "Music Generation with RNNs",
                            "LSTM generating Irish folk melodies in ABC notation with temperature sampling.",
                        ),
                        item(
                            "Rain Prediction for Australia",
                            "Machine learning comparison of meteorological models.",
                        ),
                        item(
                            "MNIST in C++",
                            "From-scratch neural network with custom forward/backward pass.",
                        ),
                    ],
                },
                Category {
                    name: "Systems / CS",
                    items: vec![
                        item(
                            "Doudizhu Game Engine (Racket)",
                            "Complete rules engine with card evaluation and simulations.",
                        ),
                        item(
                            "Biquadris — Classic Block-Stacking, Reimagined in C++",
                            "Full-featured Tetris-style game with advanced gameplay mechanics.",
                        ),
                    ],
                },
                Category {
                    name: "Full-Stack",
                    items: vec![
                        item(
                            "Rhythm – Real-Time Speech Coach",
                            "FastAPI + React + DSP pitch tracking tool from Hack The Hill.",
                        ),
                        item("Pet Monitoring App", "Full-stack monitoring + alert system."),
                    ],
                },
            ],
            note: "Each project represents a unique challenge and learning opportunity",
        },
        image: None,
        source_url: None,
        links: PageLinks {
            previous: Some(Link::new("Previous", "project-compiler")),
            next: Some(Link::new("Next Chapter", "work-experience")),
        },
    }
}

fn work_experience() -> PageRecord {
    PageRecord {
        page: Page::WorkExperience,
        kicker: "Chapter Three",
        title: "Work Experience",
        subtitle: Some("A journey through roles, growth, and impact"),
        folio: "— 3 —",
        body: PageBody::Timeline {
            roles: vec![
                Role {
                    company: "Shopify",
                    role: "Software Engineer Intern – Developer Productivity",
                    period: "Sep 2025 – Dec 2025",
                    location: "Toronto, ON",
                    summary: "Contributed to developer productivity initiatives by building CLI \
                         tools, AI agents, and automation pipelines integrated with Shopify's \
                         Rails ecosystem.",
                    achievements: vec![
                        "Built CLI tools to simplify common engineering workflows and boost developer speed",
                        "Developed AI agents to automate repetitive tasks and improve build and review efficiency",
                        "Created automation pipelines integrated with Shopify's Rails ecosystem to improve tooling reliability",
                        "Worked with teams to identify bottlenecks and ship improvements used across engineering",
                    ],
                    mark: "✦",
                },
                Role {
                    company: "Sodale Group",
                    role: "Digital Strategist/AI Intern",
                    period: "May 2025 – August 2025",
                    location: "Waterloo, ON",
                    summary: "Developed automation pipelines and AI-powered solutions to \
                         streamline financial modeling and property data analysis across \
                         Canadian markets.",
                    achievements: vec![
                        "Developed automation pipelines in Python and Power Query to streamline financial model updates and reduce manual effort",
                        "Prototyped an AI-powered chatbot using LLMs to provide conversational insights into financial and property data",
                        "Built data ingestion systems with web scraping and standardized inputs across Canadian markets to support scalable analysis",
                    ],
                    mark: "◆",
                },
                Role {
                    company: "Akom Technologies",
                    role: "Software Development Intern",
                    period: "May 2024 – August 2024",
                    location: "New Delhi, India",
                    summary: "Developed and maintained the Django backend for an IT hardware \
                         sales platform, enabling seamless customer product queries.",
                    achievements: vec![
                        "Developed and maintained the Django backend for an IT hardware sales platform, enabling seamless customer product queries",
                        "Designed and integrated database models to manage customer inquiries, improving communication between users and the sales team",
                    ],
                    mark: "◇",
                },
            ],
            closing: "Each role has been a chapter in continuous learning, pushing boundaries, \
                 and creating meaningful impact through thoughtful design and engineering.",
        },
        image: None,
        source_url: None,
        links: PageLinks {
            previous: Some(Link::new("Previous Chapter", "more-projects")),
            next: Some(Link::new("Back to Index", "index")),
        },
    }
}
