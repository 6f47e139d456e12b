// Static page content

pub struct Project {
    pub name: &'static str,
    pub link: &'static str,
}

pub struct ContactLink {
    pub label: &'static str,
    pub text: &'static str,
    pub url: &'static str,
}

pub const OWNER: &str = "Saket Kumar";
pub const TAGLINE: &str = "Front-End Developer | Java Enthusiast | MCA Student";

pub const ABOUT: &str = "I'm Saket Kumar, currently pursuing MCA (2024-26) from Guru Jambheshwar \
University of Science and Technology. I graduated in BCA (2021-2024) from MDU Rohtak with an 8.1 CGPA. \
I love coding, building web applications, and continuously learning new technologies.";

pub const SKILLS: [&str; 9] = [
    "Java",
    "Python",
    "JavaScript",
    "React",
    "HTML",
    "CSS",
    "SQL",
    "C++",
    "C",
];

pub const EDUCATION: [&str; 3] = [
    "MCA (2024-26) - Guru Jambheshwar University of Science and Technology",
    "Bachelor's degree in computer science (2021-2024)",
    "Schooling - Village school & town high school",
];

pub const PROJECTS: [Project; 5] = [
    Project {
        name: "Chess Game",
        link: "https://saketkhundia.github.io/chess-game",
    },
    Project {
        name: "Calculator App",
        link: "https://saketkhundia.github.io/calculator-app/",
    },
    Project {
        name: "Quotes Generator",
        link: "https://github.com/saketkhundia/Quote-Generator-Using-React-",
    },
    Project {
        name: "To-Do App",
        link: "https://github.com/saketkhundia",
    },
    Project {
        name: "Music Player",
        link: "https://github.com/saketkhundia",
    },
];

pub const CONTACT_LINKS: [ContactLink; 2] = [
    ContactLink {
        label: "GitHub",
        text: "github.com/saketkhundia",
        url: "https://github.com/saketkhundia",
    },
    ContactLink {
        label: "LinkedIn",
        text: "linkedin.com/in/saketkhundia",
        url: "https://www.linkedin.com/in/saketkhundia",
    },
];
