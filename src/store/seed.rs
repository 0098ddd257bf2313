//! Sample agent files used to populate an empty in-memory store.

use crate::state::{ANONYMOUS_AUTHOR, AgentFile};

/// (id, name, description, content, date posted)
const SAMPLES: &[(&str, &str, &str, &str, &str)] = &[
    (
        "1",
        "code-reviewer.md",
        "An agent that reviews code for best practices, potential bugs, and style issues",
        "# Code Reviewer Agent\n\n## Purpose\nReviews code for best practices, potential bugs, and consistent style.\n\n## Capabilities\n- Static analysis\n- Style checking\n- Security vulnerability detection\n- Performance optimization suggestions\n",
        "2025-11-10",
    ),
    (
        "2",
        "test-generator.md",
        "Generates comprehensive unit tests for your code",
        "# Test Generator Agent\n\n## Purpose\nGenerates unit tests with high coverage for your codebase.\n\n## Capabilities\n- Unit test generation\n- Edge case identification\n- Mock data creation\n- Test coverage analysis\n",
        "2025-11-09",
    ),
    (
        "3",
        "documentation-writer.md",
        "Creates clear and comprehensive documentation for your code",
        "# Documentation Writer Agent\n\n## Purpose\nDocuments functions, classes, and modules.\n\n## Capabilities\n- Function documentation\n- API documentation\n- README generation\n- Code comment suggestions\n",
        "2025-11-08",
    ),
    (
        "4",
        "refactoring-assistant.md",
        "Suggests and implements code refactorings to improve maintainability",
        "# Refactoring Assistant Agent\n\n## Purpose\nIdentifies code smells and suggests refactorings.\n\n## Capabilities\n- Code smell detection\n- Extract method refactoring\n- Simplify conditional logic\n- Remove duplication\n",
        "2025-11-07",
    ),
    (
        "5",
        "bug-finder.md",
        "Analyzes code to find potential bugs and edge cases",
        "# Bug Finder Agent\n\n## Purpose\nFinds potential bugs, edge cases, and error-prone patterns.\n\n## Capabilities\n- Null pointer detection\n- Off-by-one errors\n- Race condition identification\n- Type mismatch detection\n",
        "2025-11-06",
    ),
    (
        "6",
        "api-designer.md",
        "Designs RESTful and GraphQL APIs following best practices",
        "# API Designer Agent\n\n## Purpose\nDesigns well-structured REST and GraphQL APIs.\n\n## Capabilities\n- RESTful API design\n- GraphQL schema design\n- OpenAPI specification generation\n- API versioning strategies\n",
        "2025-11-05",
    ),
    (
        "7",
        "performance-optimizer.md",
        "Identifies and fixes performance bottlenecks in your code",
        "# Performance Optimizer Agent\n\n## Purpose\nIdentifies performance bottlenecks and suggests optimizations.\n\n## Capabilities\n- Time complexity analysis\n- Memory usage optimization\n- Database query optimization\n- Caching strategies\n",
        "2025-11-04",
    ),
    (
        "8",
        "security-auditor.md",
        "Audits code for security vulnerabilities and best practices",
        "# Security Auditor Agent\n\n## Purpose\nPerforms security audits to identify vulnerabilities.\n\n## Capabilities\n- OWASP Top 10 checks\n- SQL injection detection\n- XSS vulnerability detection\n- Authentication/authorization review\n",
        "2025-11-03",
    ),
    (
        "9",
        "ui-designer.md",
        "Generates UI component designs and implementations",
        "# UI Designer Agent\n\n## Purpose\nDesigns and implements user interface components.\n\n## Capabilities\n- Component library creation\n- Responsive design\n- Accessibility compliance\n- Design system implementation\n",
        "2025-11-02",
    ),
    (
        "10",
        "database-architect.md",
        "Designs database schemas and optimizes queries",
        "# Database Architect Agent\n\n## Purpose\nDesigns efficient database schemas and optimizes queries.\n\n## Capabilities\n- Schema design\n- Index optimization\n- Query performance tuning\n- Migration planning\n",
        "2025-11-01",
    ),
    (
        "11",
        "devops-helper.md",
        "Assists with CI/CD, deployments, and infrastructure",
        "# DevOps Helper Agent\n\n## Purpose\nAssists with DevOps tasks and infrastructure management.\n\n## Capabilities\n- CI/CD pipeline setup\n- Docker containerization\n- Kubernetes orchestration\n- Infrastructure as Code\n",
        "2025-10-31",
    ),
    (
        "12",
        "accessibility-checker.md",
        "Ensures your application meets accessibility standards",
        "# Accessibility Checker Agent\n\n## Purpose\nChecks applications against WCAG accessibility standards.\n\n## Capabilities\n- ARIA label verification\n- Keyboard navigation testing\n- Screen reader compatibility\n- Color contrast checking\n",
        "2025-10-30",
    ),
    (
        "13",
        "error-handler.md",
        "Implements comprehensive error handling strategies",
        "# Error Handler Agent\n\n## Purpose\nImplements robust error handling across your application.\n\n## Capabilities\n- Try-catch implementation\n- Error boundary creation\n- Logging strategies\n- User-friendly error messages\n",
        "2025-10-29",
    ),
    (
        "14",
        "mobile-adapter.md",
        "Adapts web applications for mobile platforms",
        "# Mobile Adapter Agent\n\n## Purpose\nOptimizes applications for mobile platforms.\n\n## Capabilities\n- Responsive design implementation\n- Touch gesture support\n- Mobile performance optimization\n- Progressive Web App features\n",
        "2025-10-28",
    ),
    (
        "15",
        "analytics-integrator.md",
        "Integrates analytics and tracking into applications",
        "# Analytics Integrator Agent\n\n## Purpose\nIntegrates analytics and event tracking.\n\n## Capabilities\n- Event tracking setup\n- Conversion funnel analysis\n- A/B testing implementation\n- Privacy-compliant tracking\n",
        "2025-10-27",
    ),
];

/// The built-in sample files, newest first.
#[must_use]
pub fn sample_agent_files() -> Vec<AgentFile> {
    SAMPLES
        .iter()
        .map(|&(id, name, description, content, date_posted)| AgentFile {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            content: content.into(),
            date_posted: date_posted.into(),
            author: ANONYMOUS_AUTHOR.into(),
            tags: None,
        })
        .collect()
}
