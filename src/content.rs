//! Static portfolio content rendered by the page sections.

#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    pub initials: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub location: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub resume: &'static str,
    pub photo: &'static str,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// `tel:` link with everything but digits and a leading `+` stripped.
    pub fn tel(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .enumerate()
            .filter(|(i, c)| c.is_ascii_digit() || (*i == 0 && *c == '+'))
            .map(|(_, c)| c)
            .collect();
        format!("tel:{digits}")
    }
}

pub const PROFILE: Profile = Profile {
    name: "Mahesh Sharma",
    initials: "MS",
    title: "Junior Software Developer",
    tagline: "Junior Software Developer passionate about creating innovative solutions and building exceptional user experiences.",
    location: "Kothrud, Pune, India",
    phone: "+91-8003200269",
    email: "maheshsharma14051@gmail.com",
    github: "https://github.com/Mahesh3317",
    linkedin: "https://www.linkedin.com/in/mahesh-sharma-49200628a/",
    resume: "/Mahesh-Resume.pdf",
    photo: "/myimage.jpeg",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub static ABOUT_STATS: [Stat; 2] = [
    Stat {
        value: "1.5",
        label: "Years Experience",
    },
    Stat {
        value: "5+",
        label: "Projects Completed",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Experience {
    pub company: &'static str,
    pub position: &'static str,
    pub duration: &'static str,
    pub location: &'static str,
    pub contributions: &'static [&'static str],
}

pub const EXPERIENCE: Experience = Experience {
    company: "CENTRAL CHINMAYA MISSION TRUST",
    position: "Junior Software Developer",
    duration: "May 2024 – Present",
    location: "Mumbai, India",
    contributions: &[
        "Built official website for Central Chinmaya Mission",
        "Used next.js, React.js and node.js",
        "Collaborated with teams for testing and feedback",
        "Version control with Git",
        "Participated in code reviews",
    ],
};

pub const EXPERIENCE_QUOTE: &str = "Continuously learning and growing in the field of software development, with a passion for creating innovative solutions.";

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub technologies: &'static [&'static str],
    pub features: &'static [&'static str],
    pub icon: &'static str,
    pub gradient: &'static str,
}

pub static PROJECTS: [Project; 2] = [
    Project {
        title: "Chinmaya Mission Gurukul Web App",
        description: "Role-based access platform for educational management",
        long_description: "A comprehensive web application designed for Chinmaya Mission Gurukul with sophisticated role-based access control. The platform serves teachers, senate students, and regular students with tailored interfaces and functionalities. Features include event management, digital library, real-time chat, and administrative tools.",
        technologies: &["React.js", "Next.js", "Node.js", "MongoDB"],
        features: &[
            "Role-based access (teacher, senate student, student)",
            "Event management system",
            "Digital e-library",
            "Real-time chatbox",
            "User authentication",
            "Responsive design",
        ],
        icon: "👥",
        gradient: "from-blue-600 to-purple-600",
    },
    Project {
        title: "Library Management System",
        description: "Full-stack CRUD application for library operations",
        long_description: "A robust library management system built with Spring Boot and React, featuring complete CRUD operations for book and user management. The system includes advanced reporting capabilities, user authentication, and an intuitive interface for librarians and members.",
        technologies: &["Spring Boot", "React", "MySQL", "Java"],
        features: &[
            "Complete CRUD operations",
            "User and book management",
            "Advanced reporting module",
            "Search and filter functionality",
            "Due date tracking",
            "Fine calculation system",
        ],
        icon: "🗄",
        gradient: "from-green-600 to-blue-600",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    Tools,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Database,
        SkillCategory::Tools,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Database => "Database",
            SkillCategory::Tools => "Tools",
        }
    }

    pub fn gradient(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "from-blue-400 to-blue-600",
            SkillCategory::Backend => "from-green-400 to-green-600",
            SkillCategory::Database => "from-purple-400 to-purple-600",
            SkillCategory::Tools => "from-orange-400 to-orange-600",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Self-assessed proficiency, in percent.
    pub level: u8,
    pub category: SkillCategory,
    pub gradient: &'static str,
}

impl Skill {
    const fn new(
        name: &'static str,
        level: u8,
        category: SkillCategory,
        gradient: &'static str,
    ) -> Self {
        Self {
            name,
            level,
            category,
            gradient,
        }
    }

    pub fn bar_width(&self) -> String {
        format!("{}%", self.level.min(100))
    }
}

pub static SKILLS: [Skill; 12] = [
    Skill::new("JavaScript", 90, SkillCategory::Frontend, "from-yellow-400 to-yellow-600"),
    Skill::new("React.js", 85, SkillCategory::Frontend, "from-blue-400 to-blue-600"),
    Skill::new("HTML5", 95, SkillCategory::Frontend, "from-orange-400 to-orange-600"),
    Skill::new("CSS3", 90, SkillCategory::Frontend, "from-blue-400 to-blue-600"),
    Skill::new("Next.js", 80, SkillCategory::Frontend, "from-gray-400 to-gray-600"),
    Skill::new("Java", 85, SkillCategory::Backend, "from-red-400 to-red-600"),
    Skill::new("Node.js", 75, SkillCategory::Backend, "from-green-400 to-green-600"),
    Skill::new("Oracle SQL", 80, SkillCategory::Database, "from-red-400 to-red-600"),
    Skill::new("MySQL", 85, SkillCategory::Database, "from-blue-400 to-blue-600"),
    Skill::new("Git", 88, SkillCategory::Tools, "from-orange-400 to-orange-600"),
    Skill::new("GitHub", 85, SkillCategory::Tools, "from-gray-400 to-gray-600"),
    Skill::new("Postman", 80, SkillCategory::Tools, "from-orange-400 to-orange-600"),
];

pub fn skills_in(category: SkillCategory) -> impl Iterator<Item = &'static Skill> {
    SKILLS.iter().filter(move |s| s.category == category)
}

#[derive(Debug, Clone, Copy)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub duration: &'static str,
    pub location: &'static str,
    pub icon: &'static str,
}

pub static EDUCATION: [Education; 3] = [
    Education {
        degree: "Bachelor of Computer Applications (BCA)",
        institution: "Jai Narain Vyas University",
        duration: "2019 - 2022",
        location: "Rajasthan, India",
        icon: "🎓",
    },
    Education {
        degree: "Higher Secondary Certificate (HSC)",
        institution: "Apex Public School",
        duration: "2018 - 2019",
        location: "India",
        icon: "📚",
    },
    Education {
        degree: "Secondary School Certificate (SSC)",
        institution: "Prerana Public School",
        duration: "2016 - 2017",
        location: "India",
        icon: "🏫",
    },
];

pub const EDUCATION_PHILOSOPHY: &str = "Education is the foundation of growth. Through continuous learning and practical application, I've developed a strong foundation in computer science and software development, always staying curious and eager to learn new technologies.";

#[derive(Debug, Clone, Copy)]
pub struct Certification {
    pub title: &'static str,
    pub provider: &'static str,
    pub description: &'static str,
    pub skills: &'static [&'static str],
    pub icon: &'static str,
    pub featured: bool,
    pub gradient: &'static str,
}

pub static CERTIFICATIONS: [Certification; 4] = [
    Certification {
        title: "Promote Engineer from GradUp",
        provider: "GradUp Platform",
        description: "Advanced engineering promotion certification recognizing exceptional technical skills and leadership potential in software development.",
        skills: &["Leadership", "Advanced Engineering", "Problem Solving"],
        icon: "🏆",
        featured: true,
        gradient: "from-yellow-500 to-orange-600",
    },
    Certification {
        title: "Full Stack Java Development",
        provider: "Qspider's, Pune",
        description: "Comprehensive certification covering Java ecosystem, Spring Boot, database integration, and full-stack development practices.",
        skills: &["Java", "Spring Boot", "Full Stack", "Database"],
        icon: "⚡",
        featured: false,
        gradient: "from-red-500 to-pink-600",
    },
    Certification {
        title: "RSCIT",
        provider: "Rajasthan Knowledge Corporation Limited",
        description: "Rajasthan State Certificate course in Information Technology covering fundamental IT skills and computer applications.",
        skills: &["IT Fundamentals", "Computer Applications", "Digital Literacy"],
        icon: "🏅",
        featured: false,
        gradient: "from-blue-500 to-purple-600",
    },
    Certification {
        title: "Advanced React.js & Next.js",
        provider: "Udemy",
        description: "Advanced course covering modern React patterns, Next.js framework, server-side rendering, and performance optimization.",
        skills: &["React.js", "Next.js", "SSR", "Performance"],
        icon: "⭐",
        featured: false,
        gradient: "from-cyan-500 to-blue-600",
    },
];

pub fn featured_certification() -> Option<&'static Certification> {
    CERTIFICATIONS.iter().find(|c| c.featured)
}

pub fn other_certifications() -> impl Iterator<Item = &'static Certification> {
    CERTIFICATIONS.iter().filter(|c| !c.featured)
}

pub static CERTIFICATION_STATS: [Stat; 4] = [
    Stat {
        value: "4+",
        label: "Certifications",
    },
    Stat {
        value: "100%",
        label: "Completion Rate",
    },
    Stat {
        value: "2+",
        label: "Years Learning",
    },
    Stat {
        value: "1",
        label: "Featured Achievement",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

const fn link(label: &'static str, href: &'static str) -> NavLink {
    NavLink { label, href }
}

pub static NAV_LINKS: [NavLink; 8] = [
    link("Home", "#home"),
    link("About", "#about"),
    link("Experience", "#experience"),
    link("Projects", "#projects"),
    link("Skills", "#skills"),
    link("Education", "#education"),
    link("Certifications", "#certifications"),
    link("Contact", "#contact"),
];

pub static FOOTER_LINKS: [NavLink; 5] = [
    link("About", "#about"),
    link("Experience", "#experience"),
    link("Projects", "#projects"),
    link("Skills", "#skills"),
    link("Contact", "#contact"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_skill_belongs_to_a_listed_category() {
        let grouped: usize = SkillCategory::ALL
            .iter()
            .map(|c| skills_in(*c).count())
            .sum();
        assert_eq!(grouped, SKILLS.len());
    }

    #[test]
    fn skills_keep_declaration_order() {
        let tools: Vec<_> = skills_in(SkillCategory::Tools).map(|s| s.name).collect();
        assert_eq!(tools, ["Git", "GitHub", "Postman"]);
    }

    #[test]
    fn skill_levels_are_percentages() {
        assert!(SKILLS.iter().all(|s| s.level <= 100));
        assert_eq!(SKILLS[2].bar_width(), "95%");
        let over = Skill::new("x", 140, SkillCategory::Tools, "");
        assert_eq!(over.bar_width(), "100%");
    }

    #[test]
    fn exactly_one_featured_certification() {
        assert_eq!(CERTIFICATIONS.iter().filter(|c| c.featured).count(), 1);
        assert_eq!(
            featured_certification().map(|c| c.title),
            Some("Promote Engineer from GradUp")
        );
        assert_eq!(other_certifications().count(), CERTIFICATIONS.len() - 1);
    }

    #[test]
    fn nav_links_point_at_section_anchors() {
        for link in NAV_LINKS.iter().chain(FOOTER_LINKS.iter()) {
            assert!(link.href.starts_with('#'), "{}", link.href);
        }
        assert!(FOOTER_LINKS.iter().all(|f| NAV_LINKS.contains(f)));
    }

    #[test]
    fn profile_links() {
        assert_eq!(PROFILE.mailto(), "mailto:maheshsharma14051@gmail.com");
        assert_eq!(PROFILE.tel(), "tel:+918003200269");
    }
}
