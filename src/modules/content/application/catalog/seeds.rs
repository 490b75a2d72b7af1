//! Hardcoded seed tables offered by the admin forms. The store-backed
//! caches are unioned on top of these at lookup time; entries here are
//! never written to the store.

/// Companies with well-known logos, the initial offer of the
/// experience form.
pub const COMPANY_LOGOS: &[(&str, &str)] = &[
    ("Google", "https://upload.wikimedia.org/wikipedia/commons/thumb/c/c1/Google_%22G%22_logo.svg/768px-Google_%22G%22_logo.svg.png"),
    ("Apple", "https://upload.wikimedia.org/wikipedia/commons/thumb/f/fa/Apple_logo_black.svg/1667px-Apple_logo_black.svg.png"),
    ("Meta", "https://upload.wikimedia.org/wikipedia/commons/thumb/7/7b/Meta_Platforms_Inc._logo.svg/1280px-Meta_Platforms_Inc._logo.svg.png"),
    ("Tesla", "https://upload.wikimedia.org/wikipedia/commons/thumb/b/bb/Tesla_T_symbol.svg/1024px-Tesla_T_symbol.svg.png"),
    ("Microsoft", "https://upload.wikimedia.org/wikipedia/commons/thumb/4/44/Microsoft_logo.svg/2048px-Microsoft_logo.svg.png"),
    ("Amazon", "https://upload.wikimedia.org/wikipedia/commons/thumb/a/a9/Amazon_logo.svg/2560px-Amazon_logo.svg.png"),
    ("Netflix", "https://upload.wikimedia.org/wikipedia/commons/thumb/0/08/Netflix_2015_logo.svg/2560px-Netflix_2015_logo.svg.png"),
    ("Adobe", "https://upload.wikimedia.org/wikipedia/commons/thumb/8/8d/Adobe_Corporate_Logo.png/1280px-Adobe_Corporate_Logo.png"),
    ("IBM", "https://upload.wikimedia.org/wikipedia/commons/thumb/5/51/IBM_logo.svg/2560px-IBM_logo.svg.png"),
    ("Airbnb", "https://upload.wikimedia.org/wikipedia/commons/thumb/6/69/Airbnb_Logo_B%C3%A9lo.svg/2560px-Airbnb_Logo_B%C3%A9lo.svg.png"),
    ("Facebook", "https://upload.wikimedia.org/wikipedia/commons/thumb/c/c2/F_icon.svg/2048px-F_icon.svg.png"),
    ("Twitter", "https://upload.wikimedia.org/wikipedia/commons/thumb/6/6f/Logo_of_Twitter.svg/2491px-Logo_of_Twitter.svg.png"),
];

/// Educational institutions with well-known logos, the initial offer
/// of the education form.
pub const INSTITUTION_LOGOS: &[(&str, &str)] = &[
    ("Udemy", "https://upload.wikimedia.org/wikipedia/commons/thumb/e/e3/Udemy_logo.svg/2560px-Udemy_logo.svg.png"),
    ("Google", "https://upload.wikimedia.org/wikipedia/commons/thumb/c/c1/Google_%22G%22_logo.svg/768px-Google_%22G%22_logo.svg.png"),
    ("Microsoft", "https://upload.wikimedia.org/wikipedia/commons/thumb/4/44/Microsoft_logo.svg/2048px-Microsoft_logo.svg.png"),
    ("Harvard University", "https://upload.wikimedia.org/wikipedia/commons/thumb/7/70/Harvard_University_logo.svg/1200px-Harvard_University_logo.svg.png"),
    ("MIT", "https://upload.wikimedia.org/wikipedia/commons/thumb/0/0c/MIT_logo.svg/2560px-MIT_logo.svg.png"),
    ("Stanford University", "https://upload.wikimedia.org/wikipedia/commons/thumb/4/4b/Stanford_Cardinal_logo.svg/1200px-Stanford_Cardinal_logo.svg.png"),
];

/// Common languages offered by the language form: (name, country,
/// flag URL).
pub const COMMON_LANGUAGES: &[(&str, &str, &str)] = &[
    ("English", "United Kingdom", "https://upload.wikimedia.org/wikipedia/en/a/ae/Flag_of_the_United_Kingdom.svg"),
    ("Spanish", "Spain", "https://upload.wikimedia.org/wikipedia/en/9/9a/Flag_of_Spain.svg"),
    ("French", "France", "https://upload.wikimedia.org/wikipedia/en/c/c3/Flag_of_France.svg"),
    ("German", "Germany", "https://upload.wikimedia.org/wikipedia/en/b/ba/Flag_of_Germany.svg"),
    ("Italian", "Italy", "https://upload.wikimedia.org/wikipedia/en/0/03/Flag_of_Italy.svg"),
    ("Portuguese", "Brasil", "https://upload.wikimedia.org/wikipedia/commons/0/05/Flag_of_Brazil.svg"),
    ("Dutch", "Netherlands", "https://upload.wikimedia.org/wikipedia/commons/2/20/Flag_of_the_Netherlands.svg"),
    ("Russian", "Russia", "https://upload.wikimedia.org/wikipedia/en/f/f3/Flag_of_Russia.svg"),
    ("Chinese", "China", "https://upload.wikimedia.org/wikipedia/commons/f/fa/Flag_of_the_People%27s_Republic_of_China.svg"),
    ("Japanese", "Japan", "https://upload.wikimedia.org/wikipedia/en/9/9e/Flag_of_Japan.svg"),
    ("Korean", "South Korea", "https://upload.wikimedia.org/wikipedia/commons/0/09/Flag_of_South_Korea.svg"),
    ("Arabic", "Saudi Arabia", "https://upload.wikimedia.org/wikipedia/commons/0/0d/Flag_of_Saudi_Arabia.svg"),
    ("Hindi", "India", "https://upload.wikimedia.org/wikipedia/en/4/41/Flag_of_India.svg"),
    ("Turkish", "Turkey", "https://upload.wikimedia.org/wikipedia/commons/b/b4/Flag_of_Turkey.svg"),
    ("Polish", "Poland", "https://upload.wikimedia.org/wikipedia/en/1/12/Flag_of_Poland.svg"),
    ("Swedish", "Sweden", "https://upload.wikimedia.org/wikipedia/en/4/4c/Flag_of_Sweden.svg"),
    ("Danish", "Denmark", "https://upload.wikimedia.org/wikipedia/commons/9/9c/Flag_of_Denmark.svg"),
    ("Finnish", "Finland", "https://upload.wikimedia.org/wikipedia/commons/b/bc/Flag_of_Finland.svg"),
    ("Greek", "Greece", "https://upload.wikimedia.org/wikipedia/commons/5/5c/Flag_of_Greece.svg"),
    ("Hebrew", "Israel", "https://upload.wikimedia.org/wikipedia/commons/d/d4/Flag_of_Israel.svg"),
];

/// Technology tags selectable on projects: (id, name, icon
/// identifier). Ids are what gets stored on the record.
pub const TECHNOLOGIES: &[(&str, &str, &str)] = &[
    ("react", "React", "FaReact"),
    ("vue", "Vue.js", "FaVuejs"),
    ("angular", "Angular", "FaAngular"),
    ("js", "JavaScript", "FaJs"),
    ("ts", "TypeScript", "SiTypescript"),
    ("html", "HTML5", "FaHtml5"),
    ("css", "CSS3", "FaCss3Alt"),
    ("sass", "Sass", "FaSass"),
    ("node", "Node.js", "FaNodeJs"),
    ("python", "Python", "FaPython"),
    ("rust", "Rust", "FaRust"),
    ("java", "Java", "FaJava"),
    ("php", "PHP", "FaPhp"),
    ("csharp", "C#", "TbBrandCSharp"),
    ("ruby", "Ruby", "FaGem"),
    ("go", "Go", "FaGolang"),
    ("swift", "Swift", "FaSwift"),
    ("kotlin", "Kotlin", "SiKotlin"),
    ("mongodb", "MongoDB", "SiMongodb"),
    ("mysql", "MySQL", "SiMysql"),
    ("postgres", "PostgreSQL", "SiPostgresql"),
    ("firebase", "Firebase", "SiFirebase"),
    ("aws", "AWS", "FaAws"),
    ("docker", "Docker", "FaDocker"),
    ("kubernetes", "Kubernetes", "SiKubernetes"),
    ("git", "Git", "FaGitAlt"),
    ("figma", "Figma", "FaFigma"),
    ("tailwind", "Tailwind CSS", "SiTailwindcss"),
    ("bootstrap", "Bootstrap", "FaBootstrap"),
    ("materialui", "Material UI", "SiMaterialdesign"),
    ("redux", "Redux", "SiRedux"),
    ("graphql", "GraphQL", "SiGraphql"),
    ("unity", "Unity", "SiUnity"),
    ("godot", "Godot", "SiGodotengine"),
    ("unreal", "Unreal Engine", "SiUnrealengine"),
    ("construct", "Construct 3", "SiConstruct3"),
    ("aftereffects", "After Effects", "SiAdobeaftereffects"),
    ("illustrator", "Illustrator", "SiAdobeillustrator"),
    ("photoshop", "Photoshop", "SiAdobephotoshop"),
    ("indesign", "In Design", "SiAdobeindesign"),
    ("audition", "Audition", "SiAdobeaudition"),
    ("cplusplus", "C++", "SiCplusplus"),
];

pub fn technology_name(id: &str) -> Option<&'static str> {
    TECHNOLOGIES
        .iter()
        .find(|(tag, _, _)| *tag == id)
        .map(|(_, name, _)| *name)
}
