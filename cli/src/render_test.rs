use inventario::InventoryItem;

use super::*;

fn item(id: i64, nome: &str, ativo: bool) -> InventoryItem {
    InventoryItem {
        id,
        nome: Some(nome.into()),
        etiqueta: Some(10),
        numero_serie: None,
        usuario: Some("ana".into()),
        observacoes: None,
        ativo: Some(ativo),
        setor: Some("TI".into()),
    }
}

#[test]
fn empty_body_prints_headers_and_placeholder() {
    let out = table(&TableBody::Empty, PageVariant::Extended);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("ID | Nome"));
    assert!(lines[0].ends_with("Setor"));
    assert_eq!(lines[1], "Nenhum item encontrado.");
}

#[test]
fn failed_body_prints_error_placeholder() {
    let out = table(&TableBody::Failed, PageVariant::Simple);
    assert!(out.ends_with("Erro ao carregar dados.\n"));
    assert!(!out.contains("Setor"));
}

#[test]
fn rows_are_aligned_under_headers() {
    let body = TableBody::Rows(vec![item(5, "Teclado", true), item(12, "Cadeira giratória", false)]);
    let out = table(&body, PageVariant::Extended);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[1].starts_with("--"));
    assert!(lines[2].starts_with("5  | Teclado "));
    assert!(lines[2].contains("| ativo "));
    assert!(lines[3].contains("Cadeira giratória | 10"));
    assert!(lines[3].contains("Não ativo"));
    assert!(lines[3].ends_with("TI"));
}

#[test]
fn simple_variant_has_six_columns() {
    let body = TableBody::Rows(vec![item(1, "Mesa", true)]);
    let out = table(&body, PageVariant::Simple);
    let header = out.lines().next().unwrap();
    assert_eq!(header.split(" | ").count(), 6);
    assert!(!out.contains("ativo"));
}

#[test]
fn status_marks_tone() {
    assert_eq!(status(&StatusLine::default()), None);
    assert_eq!(status(&StatusLine::neutral("Enviando dados...")).unwrap(), "Enviando dados...");
    assert_eq!(status(&StatusLine::success("Item cadastrado com sucesso!")).unwrap(), "[ok] Item cadastrado com sucesso!");
    assert_eq!(status(&StatusLine::error("falhou")).unwrap(), "[erro] falhou");
}

#[test]
fn alert_modal_is_marked_as_error() {
    let alert = ModalContent { message: "Etiqueta deve ser um número válido.".into(), kind: ModalKind::Alert };
    assert_eq!(modal(&alert), "[erro] Etiqueta deve ser um número válido.");
    let info = ModalContent { message: "Item atualizado com sucesso!".into(), kind: ModalKind::Info };
    assert_eq!(modal(&info), "Item atualizado com sucesso!");
}
