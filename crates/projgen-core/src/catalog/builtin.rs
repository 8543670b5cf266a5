//! Built-in catalog entries

use super::{AddonDescriptor, ExtraAction, ExtraDescriptor, FrameworkDescriptor};

#[allow(clippy::too_many_arguments)]
fn framework(
    name: &str,
    display_name: &str,
    language: &str,
    template_path: &str,
    runtime: &str,
    commands: [&str; 3],
    description: &str,
    supported_addons: &[&str],
) -> FrameworkDescriptor {
    let [install_cmd, start_cmd, build_cmd] = commands;
    FrameworkDescriptor {
        name: name.to_string(),
        display_name: display_name.to_string(),
        language: language.to_string(),
        template_path: template_path.to_string(),
        runtime: runtime.to_string(),
        install_cmd: install_cmd.to_string(),
        start_cmd: start_cmd.to_string(),
        build_cmd: build_cmd.to_string(),
        description: description.to_string(),
        supported_addons: supported_addons.iter().map(|s| s.to_string()).collect(),
    }
}

fn addon(name: &str, display_name: &str, install_cmd: &str) -> AddonDescriptor {
    AddonDescriptor {
        name: name.to_string(),
        display_name: display_name.to_string(),
        install_cmd: install_cmd.to_string(),
    }
}

fn extra(name: &str, display_name: &str, action: ExtraAction) -> ExtraDescriptor {
    ExtraDescriptor {
        name: name.to_string(),
        display_name: display_name.to_string(),
        action,
    }
}

const NPM: [&str; 3] = ["npm install", "npm run dev", "npm run build"];

pub(super) fn frontend_frameworks() -> Vec<FrameworkDescriptor> {
    vec![
        framework(
            "vite-react-ts",
            "Vite + React + TypeScript",
            "TypeScript",
            "templates/frontend/vite-react-ts",
            "node",
            NPM,
            "Vite with React and TypeScript - Fast, modern frontend tooling",
            &[
                "tailwindcss",
                "material-ui",
                "bootstrap",
                "shadcn",
                "radix",
                "eslint",
                "prettier",
            ],
        ),
        framework(
            "vite-vue-ts",
            "Vite + Vue + TypeScript",
            "TypeScript",
            "templates/frontend/vite-vue-ts",
            "node",
            NPM,
            "Vite with Vue 3 and TypeScript - Progressive JavaScript framework",
            &["tailwindcss", "vuetify", "eslint", "prettier"],
        ),
        framework(
            "vite-svelte-ts",
            "Vite + Svelte + TypeScript",
            "TypeScript",
            "templates/frontend/vite-svelte-ts",
            "node",
            NPM,
            "Vite with Svelte and TypeScript - Cybernetically enhanced web apps",
            &["tailwindcss", "eslint", "prettier"],
        ),
        framework(
            "nextjs-ts",
            "Next.js + TypeScript + Tailwind",
            "TypeScript",
            "templates/frontend/nextjs-ts",
            "node",
            NPM,
            "Next.js with TypeScript and Tailwind CSS - React framework for production",
            &["shadcn", "radix", "prisma", "auth", "eslint", "prettier"],
        ),
    ]
}

pub(super) fn backend_frameworks() -> Vec<FrameworkDescriptor> {
    vec![
        framework(
            "nestjs-api",
            "NestJS + TypeScript",
            "TypeScript",
            "templates/backend/nestjs-api",
            "node",
            ["npm install", "npm run start:dev", "npm run build"],
            "NestJS - Progressive Node.js framework for efficient, scalable server-side applications",
            &["prisma", "typeorm", "mongoose", "passport", "swagger"],
        ),
        framework(
            "express-api",
            "Express.js + JavaScript",
            "JavaScript",
            "templates/backend/express-api",
            "node",
            ["npm install", "npm start", ""],
            "Express.js - Fast, unopinionated, minimalist web framework for Node.js",
            &["mongodb", "postgresql", "mysql", "jwt", "cors"],
        ),
        framework(
            "go-fiber",
            "Go + Fiber",
            "Go",
            "templates/backend/go-fiber",
            "go",
            ["go mod tidy", "go run main.go", "go build -o app"],
            "Fiber - Express-inspired web framework built on top of Fasthttp",
            &["gorm", "postgresql", "mysql", "redis", "jwt"],
        ),
    ]
}

pub(super) fn fullstack_frameworks() -> Vec<FrameworkDescriptor> {
    vec![
        framework(
            "t3-stack",
            "T3 Stack (Next.js + tRPC + Prisma + Tailwind)",
            "TypeScript",
            "templates/fullstack/t3-stack",
            "node",
            NPM,
            "T3 Stack - The best way to start a full-stack, typesafe Next.js app",
            &["auth", "trpc", "prisma"],
        ),
        framework(
            "mern-stack",
            "MERN Stack (MongoDB + Express + React + Node)",
            "JavaScript",
            "templates/fullstack/mern-stack",
            "node",
            ["npm run install-all", "npm run dev", "npm run build"],
            "MERN Stack - Full-stack JavaScript solution",
            &["redux", "tailwindcss", "jwt", "mongoose"],
        ),
    ]
}

// Install commands are split on whitespace and run without a shell, so they
// must not rely on `&&`, pipes or globs.
pub(super) fn css_frameworks() -> Vec<AddonDescriptor> {
    vec![
        addon(
            "tailwindcss",
            "Tailwind CSS",
            "npm install -D tailwindcss postcss autoprefixer",
        ),
        addon("bootstrap", "Bootstrap", "npm install bootstrap"),
        addon(
            "material-ui",
            "Material UI",
            "npm install @mui/material @emotion/react @emotion/styled",
        ),
    ]
}

pub(super) fn ui_libraries() -> Vec<AddonDescriptor> {
    vec![
        addon("shadcn", "shadcn/ui", "npx shadcn@latest init"),
        addon("radix", "Radix UI", "npm install @radix-ui/themes"),
    ]
}

pub(super) fn extras() -> Vec<ExtraDescriptor> {
    vec![
        extra(
            "dockerfile",
            "Dockerfile",
            ExtraAction::CreateFile("Dockerfile".to_string()),
        ),
        extra(
            "docker-compose",
            "Docker Compose",
            ExtraAction::CreateFile("docker-compose.yml".to_string()),
        ),
        extra(
            "eslint",
            "ESLint",
            ExtraAction::RunCommand("npm init @eslint/config@latest".to_string()),
        ),
        extra(
            "prettier",
            "Prettier",
            ExtraAction::RunCommand("npm install -D prettier".to_string()),
        ),
        extra(
            "github-actions",
            "GitHub Actions CI/CD",
            ExtraAction::CreateFile(".github/workflows/ci.yml".to_string()),
        ),
        extra(
            "env",
            ".env file",
            ExtraAction::CreateFile(".env".to_string()),
        ),
        extra(
            "gitignore",
            ".gitignore",
            ExtraAction::CreateFile(".gitignore".to_string()),
        ),
    ]
}
