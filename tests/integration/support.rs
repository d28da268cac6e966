use coursetree::tree::node::MIME_PDF;
use coursetree::tree::parse_forest;
use coursetree::Node;

/// Portal-shaped snapshot used across the integration tests.
pub const PORTAL_SNAPSHOT: &str = r#"[
  {
    "id": "root",
    "name": "Root",
    "mimeType": "application/vnd.google-apps.folder",
    "children": [
      {
        "id": "y1",
        "name": "1 Year",
        "mimeType": "application/vnd.google-apps.folder",
        "children": [
          {
            "id": "ccycle",
            "name": "C - Cycle",
            "mimeType": "application/vnd.google-apps.folder",
            "children": [
              {
                "id": "maths",
                "name": "Maths",
                "mimeType": "application/vnd.google-apps.folder",
                "children": [
                  {
                    "id": "notes",
                    "name": "notes.pdf",
                    "mimeType": "application/pdf",
                    "viewLink": "https://drive.example/view/notes",
                    "downloadLink": "https://drive.example/dl/notes"
                  },
                  {
                    "id": "sheet",
                    "name": "notes.xlsx",
                    "mimeType": "application/vnd.ms-excel"
                  }
                ]
              },
              {
                "id": "esc",
                "name": "ESC",
                "mimeType": "application/vnd.google-apps.folder",
                "children": [
                  {
                    "id": "esc-adv",
                    "name": "ESC-Advanced",
                    "mimeType": "application/vnd.google-apps.folder",
                    "children": [
                      {"id": "esc-notes", "name": "Module 1 notes.txt", "mimeType": "text/plain"}
                    ]
                  }
                ]
              },
              {
                "id": "plc",
                "name": "PLC (22PL15X)",
                "mimeType": "application/vnd.google-apps.folder",
                "children": [
                  {"id": "plc-lab", "name": "Lab manual.pdf", "mimeType": "application/pdf"}
                ]
              }
            ]
          }
        ]
      },
      {
        "id": "qp",
        "name": "Question Papers",
        "mimeType": "application/vnd.google-apps.folder",
        "children": [
          {"id": "qp-2023", "name": "2023 maths paper.pdf", "mimeType": "application/pdf"}
        ]
      }
    ]
  }
]"#;

pub fn portal_forest() -> Vec<Node> {
    parse_forest(PORTAL_SNAPSHOT.as_bytes(), 32).expect("fixture snapshot parses")
}

/// The portal snapshot plus a root folder named after an elective selection.
pub fn portal_forest_with_electives() -> Vec<Node> {
    let mut forest = portal_forest();
    forest.push(Node::folder(
        "course1",
        "Course 1",
        vec![Node::file("course1-notes", "Course 1 notes.pdf", MIME_PDF)],
    ));
    forest
}
