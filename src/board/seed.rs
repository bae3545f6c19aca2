use crate::board::models::{Employee, Project};
use crate::error::AppError;

/// The global month list every project row aligns to.
pub fn months() -> Vec<String> {
    ["Jan", "Feb", "Mar"].iter().map(|m| m.to_string()).collect()
}

/// Seed portfolio. Role ids are unique across the whole board; each role row
/// carries one cell per global month, in the same order.
pub fn projects() -> Result<Vec<Project>, AppError> {
    Ok(serde_json::from_str(PROJECTS)?)
}

/// Seed roster, as shown in the availabilities column.
pub fn employees() -> Result<Vec<Employee>, AppError> {
    Ok(serde_json::from_str(EMPLOYEES)?)
}

const PROJECTS: &str = r#"[
  {
    "id": "1",
    "name": "Project 1",
    "scenario": "Scenario",
    "roles": [
      {
        "id": "1",
        "type": "DEV",
        "months": [
          { "month": "Jan", "assigned": true },
          { "month": "Feb", "assigned": true },
          { "month": "Mar", "assigned": false }
        ]
      },
      {
        "id": "2",
        "type": "DEV",
        "months": [
          { "month": "Jan", "assigned": true },
          { "month": "Feb", "assigned": false },
          { "month": "Mar", "assigned": false }
        ]
      },
      {
        "id": "3",
        "type": "UX",
        "months": [
          { "month": "Jan", "assigned": false },
          { "month": "Feb", "assigned": true },
          { "month": "Mar", "assigned": true }
        ]
      },
      {
        "id": "4",
        "type": "ASN",
        "months": [
          { "month": "Jan", "assigned": false },
          { "month": "Feb", "assigned": false },
          { "month": "Mar", "assigned": false }
        ]
      }
    ]
  },
  {
    "id": "2",
    "name": "Project 2",
    "scenario": "Scenario / Opportunity",
    "roles": [
      {
        "id": "5",
        "type": "DEV",
        "months": [
          { "month": "Jan", "assigned": false },
          { "month": "Feb", "assigned": true },
          { "month": "Mar", "assigned": false }
        ]
      },
      {
        "id": "6",
        "type": "DEV",
        "months": [
          { "month": "Jan", "assigned": false },
          { "month": "Feb", "assigned": false },
          { "month": "Mar", "assigned": false }
        ]
      },
      {
        "id": "7",
        "type": "UX",
        "months": [
          { "month": "Jan", "assigned": false },
          { "month": "Feb", "assigned": false },
          { "month": "Mar", "assigned": true }
        ]
      },
      {
        "id": "8",
        "type": "ASN",
        "months": [
          { "month": "Jan", "assigned": false },
          { "month": "Feb", "assigned": false },
          { "month": "Mar", "assigned": false }
        ]
      }
    ]
  }
]"#;

const EMPLOYEES: &str = r#"[
  {
    "id": "1",
    "name": "Sarah Chen",
    "role": "Senior Developer",
    "availability": 90,
    "status": "free",
    "skills": ["React", "TypeScript", "Node.js"]
  },
  {
    "id": "2",
    "name": "Marcus Johnson",
    "role": "UX Designer",
    "availability": 80,
    "status": "partial",
    "skills": ["Figma", "UI/UX", "Prototyping"]
  },
  {
    "id": "3",
    "name": "Elena Rodriguez",
    "role": "Full Stack Developer",
    "availability": 70,
    "status": "partial",
    "skills": ["Vue", "Python", "AWS"]
  },
  {
    "id": "4",
    "name": "David Kim",
    "role": "Backend Developer",
    "availability": 0,
    "status": "booked",
    "skills": ["Java", "Spring", "PostgreSQL"]
  }
]"#;
