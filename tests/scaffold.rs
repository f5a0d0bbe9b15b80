use dashgen::defaults::{Defaults, WindowConfig};
use dashgen::naming::{sanitize, title_case};
use dashgen::scaffold;
use dashgen::ProjectSpec;
use std::fs;
use tempfile::TempDir;

#[test]
fn life_dashboard_end_to_end() {
    let dir = TempDir::new().unwrap();
    let spec =
        ProjectSpec::from_input("Life Dashboard", "Ideas, To-Do List", &Defaults::default())
            .unwrap();

    assert_eq!(spec.module_name, "life_dashboard");
    assert_eq!(spec.tabs[0].file_name, "ideas.go");

    // File name and function name follow different rules for hyphens.
    let todo = &spec.tabs[1];
    assert_eq!(todo.identifier_base, "todo_list");
    assert_eq!(todo.file_name, "todo_list.go");
    assert_eq!(todo.title_case_name, "ToDoList");
    assert_eq!(todo.function_name(), "MakeToDoListUI");

    let plan = scaffold::plan(&spec, WindowConfig::default()).unwrap();
    let report = scaffold::write(&plan, dir.path()).unwrap();
    let root = dir.path().join("life_dashboard");
    assert_eq!(report.root, root);

    let main_go = fs::read_to_string(root.join("cmd/life_dashboard/main.go")).unwrap();
    let ideas_at = main_go
        .find(r#"container.NewTabItem("Ideas", ui.MakeIdeasUI(myWindow))"#)
        .unwrap();
    let todo_at = main_go
        .find(r#"container.NewTabItem("To-Do List", ui.MakeToDoListUI(myWindow))"#)
        .unwrap();
    assert!(ideas_at < todo_at);
    assert_eq!(main_go.matches("container.NewTabItem(").count(), 2);

    // Every function referenced by the entry point is declared by a tab module.
    let todo_go = fs::read_to_string(root.join("internal/ui/todo_list.go")).unwrap();
    assert!(todo_go.contains("func MakeToDoListUI(win fyne.Window) fyne.CanvasObject {"));
    assert!(todo_go.contains("var todo_listData = []string{"));

    let ideas_go = fs::read_to_string(root.join("internal/ui/ideas.go")).unwrap();
    assert!(ideas_go.contains("func MakeIdeasUI("));

    let gitignore = fs::read_to_string(root.join(".gitignore")).unwrap();
    assert!(gitignore.contains("vendor/"));
}

#[test]
fn default_tab_when_no_tabs_given() {
    let spec = ProjectSpec::from_input("Tracker", "", &Defaults::default()).unwrap();
    assert_eq!(spec.tabs.len(), 1);
    assert_eq!(spec.tabs[0].function_name(), "MakeItemsUI");

    let plan = scaffold::plan(&spec, WindowConfig::default()).unwrap();
    assert!(plan.files[0]
        .contents
        .contains(r#"container.NewTabItem("Items", ui.MakeItemsUI(myWindow))"#));
}

#[test]
fn naming_properties_from_examples() {
    assert_eq!(sanitize("My Awesome Project"), "my_awesome_project");
    assert_eq!(sanitize("To-Do List"), "todo_list");
    assert_eq!(sanitize(""), sanitize("!!!"));
    assert_eq!(title_case("my ideas"), "MyIdeas");
    assert_eq!(title_case("to-do list"), "ToDoList");
    assert_eq!(title_case("   "), "");
}

#[test]
fn rerun_into_existing_project_overwrites_with_warning() {
    let dir = TempDir::new().unwrap();
    let defaults = Defaults::default();

    let first = ProjectSpec::from_input("Life Dashboard", "Ideas", &defaults).unwrap();
    scaffold::write(&scaffold::plan(&first, defaults.window).unwrap(), dir.path()).unwrap();

    let second = ProjectSpec::from_input("Life Dashboard", "Ideas, Notes", &defaults).unwrap();
    let report =
        scaffold::write(&scaffold::plan(&second, defaults.window).unwrap(), dir.path()).unwrap();

    assert_eq!(report.warnings.len(), 1);
    let main_go =
        fs::read_to_string(dir.path().join("life_dashboard/cmd/life_dashboard/main.go")).unwrap();
    assert!(main_go.contains("ui.MakeNotesUI(myWindow)"));
}
