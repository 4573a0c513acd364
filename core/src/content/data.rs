//! Portfolio content.
use super::types::*;

static PROFILE: Profile = Profile {
    name: "Ariful Islam",
    role: "Frontend Developer",
    tagline: "A passionate developer focused on building scalable and user-friendly web applications. \
        I transform ideas into elegant, performant digital experiences.",
    avatar: "https://i.ibb.co.com/DgTxGcbK/Whats-App-Image-2025-10-16-at-10-38-53-PM.jpg",
    cv_url: "https://drive.google.com/file/d/1ziji3q3Gjspwutt-DIHe1QoI5jz8Cax2/view?usp=drive_link",
};

static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        icon: Icon::Github,
        label: "GitHub",
        url: "https://github.com/ArifulIslam016",
    },
    SocialLink {
        icon: Icon::Linkedin,
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/arifulislam-dev",
    },
    SocialLink {
        icon: Icon::Twitter,
        label: "Twitter",
        url: "https://x.com/ArifulIsla6692",
    },
    SocialLink {
        icon: Icon::Facebook,
        label: "Facebook",
        url: "https://www.facebook.com/ariful.islam.708366",
    },
];

static FEATURES: &[Feature] = &[
    Feature {
        icon: Icon::Code,
        title: "Clean Code Enthusiast",
        description:
            "Writing maintainable, readable code following best practices and modern standards.",
    },
    Feature {
        icon: Icon::Zap,
        title: "Performance Optimizer",
        description:
            "Obsessed with fast load times, smooth animations, and exceptional user experiences.",
    },
    Feature {
        icon: Icon::BookOpen,
        title: "Continuous Learner",
        description:
            "Always exploring new technologies and staying updated with the latest web trends.",
    },
];

static SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Frontend",
        icon: Icon::Layers,
        accent: "from-cyan-500 to-blue-500",
        skills: &[
            Skill { name: "React", level: 90 },
            Skill { name: "TypeScript", level: 85 },
            Skill { name: "Tailwind CSS", level: 95 },
            Skill { name: "Next.js", level: 80 },
            Skill { name: "JavaScript", level: 90 },
            Skill { name: "HTML/CSS", level: 95 },
        ],
    },
    SkillCategory {
        title: "Backend",
        icon: Icon::Database,
        accent: "from-indigo-500 to-purple-500",
        skills: &[
            Skill { name: "Node.js", level: 80 },
            Skill { name: "Express.js", level: 85 },
            Skill { name: "REST APIs", level: 85 },
            Skill { name: "MongoDB", level: 75 },
            Skill { name: "Firebase", level: 80 },
        ],
    },
    SkillCategory {
        title: "Tools & Others",
        icon: Icon::Wrench,
        accent: "from-purple-500 to-pink-500",
        skills: &[
            Skill { name: "Git/GitHub", level: 90 },
            Skill { name: "VS Code", level: 95 },
            Skill { name: "Postman", level: 85 },
            Skill { name: "Figma", level: 75 },
            Skill { name: "Vite", level: 85 },
            Skill { name: "Redux", level: 80 },
        ],
    },
];

static ADDITIONAL_TECHNOLOGIES: &[&str] = &[
    "Redux",
    "DaisyUI",
    "Prisma",
    "JWT",
    "Recharts",
    "Framer Motion",
    "REST APIs",
    "Axios",
];

static EDUCATION: &[EducationEntry] = &[
    EducationEntry {
        degree: "Diploma in Engineering (CST)",
        institution: "Graphic Arts Institute",
        period: "2023 - 2027",
        description: "Specializing in Computer Science and Technology, learning both theoretical \
            concepts and practical applications in software development.",
        icon: Icon::GraduationCap,
    },
    EducationEntry {
        degree: "Secondary School Certificate",
        institution: "Garudaha Sisho Sadan High School",
        period: "2022 - 2023",
        description: "Completed secondary education with a focus on science and mathematics, \
            building a strong foundation for technical studies.",
        icon: Icon::Award,
    },
];

static PROJECTS: &[Project] = &[
    Project {
        id: ProjectId(1),
        title: "Krishi Link",
        description: "An agricultural marketplace platform connecting farmers directly with buyers, \
            featuring real-time pricing, product listings, and secure transactions.",
        image: "https://images.unsplash.com/photo-1625246333195-78d9c38ad449?w=800&h=500&fit=crop",
        live_url: "https://krishilink.vercel.app",
        source_url: "https://github.com/ArifulIslam016/KrishiLink",
        tech_stack: &["React", "Node.js", "MongoDB", "Tailwind CSS", "Express.js"],
        challenges: "Implementing real-time price updates and ensuring secure payment processing \
            for agricultural products.",
        future_plans: "Planning to add AI-powered crop disease detection and weather-based \
            farming recommendations.",
    },
    Project {
        id: ProjectId(2),
        title: "ScholarsStream",
        description: "A comprehensive scholarship platform helping students discover and apply for \
            educational funding opportunities with advanced filtering and tracking.",
        image: "https://i.ibb.co.com/wrK2FyXP/Screenshot-2025-12-31-023621.png",
        live_url: "https://scholarstream-5ca0e.web.app/",
        source_url: "https://github.com/ArifulIslam016/ScholarStream-.git",
        tech_stack: &["React", "Firebase", "Tailwind CSS", "React Router", "Context API"],
        challenges: "Creating an intuitive search and filter system for thousands of scholarships \
            with various criteria.",
        future_plans: "Adding personalized recommendations using machine learning and application \
            deadline reminders.",
    },
    Project {
        id: ProjectId(3),
        title: "Zap Shift",
        description: "A modern parcel management system streamlining delivery operations with \
            real-time tracking, automated notifications, and dashboard analytics.",
        image: "https://images.unsplash.com/photo-1566576721346-d4a3b4eaeb55?w=800&h=500&fit=crop",
        live_url: "https://zapshift-5ef0d.web.app/",
        source_url: "https://github.com/ArifulIslam016/ZapShift",
        tech_stack: &["React", "Firebase", "Tailwind CSS", "Google Maps API", "Chart.js"],
        challenges: "Integrating real-time location tracking and optimizing route calculations \
            for multiple deliveries.",
        future_plans: "Implementing predictive delivery times using historical data and adding \
            multi-language support.",
    },
];

static CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        icon: Icon::Mail,
        label: "Email",
        value: "arifulq234@gmail.com",
        href: "mailto:arifulq234@gmail.com",
    },
    ContactChannel {
        icon: Icon::Phone,
        label: "Phone",
        value: "+880 1610 854 092",
        href: "tel:+8801610854092",
    },
    ContactChannel {
        icon: Icon::Phone,
        label: "WhatsApp",
        value: "+880 1610 854 092",
        href: "https://wa.me/8801610854092",
    },
];

pub fn profile() -> &'static Profile {
    &PROFILE
}

pub fn social_links() -> &'static [SocialLink] {
    SOCIAL_LINKS
}

pub fn features() -> &'static [Feature] {
    FEATURES
}

pub fn skill_categories() -> &'static [SkillCategory] {
    SKILL_CATEGORIES
}

/// Technologies listed outside of the skill categories.
pub fn additional_technologies() -> &'static [&'static str] {
    ADDITIONAL_TECHNOLOGIES
}

pub fn education() -> &'static [EducationEntry] {
    EDUCATION
}

/// Projects in display order.
pub fn projects() -> &'static [Project] {
    PROJECTS
}

/// Looks up a project by id.
pub fn project(id: ProjectId) -> Option<&'static Project> {
    PROJECTS.iter().find(|project| project.id == id)
}

pub fn contact_channels() -> &'static [ContactChannel] {
    CONTACT_CHANNELS
}
