use super::*;

#[test]
fn accepts_s_and_sim_in_any_case() {
    for answer in ["s", "S", "sim\n", "  Sim  ", "SIM\r\n"] {
        assert!(is_affirmative(answer), "{answer:?}");
    }
}

#[test]
fn anything_else_declines() {
    for answer in ["", "\n", "n", "não", "yes", "si", "simm"] {
        assert!(!is_affirmative(answer), "{answer:?}");
    }
}

#[test]
fn ask_writes_question_and_reads_one_line() {
    let mut input = io::Cursor::new(b"sim\nn\n".to_vec());
    let mut output = Vec::new();
    assert!(ask("Excluir?", &mut input, &mut output).unwrap());
    assert_eq!(String::from_utf8(output).unwrap(), "Excluir? [s/N] ");
    assert!(!ask("De novo?", &mut input, &mut Vec::new()).unwrap());
}

#[test]
fn eof_declines() {
    let mut input = io::Cursor::new(Vec::new());
    assert!(!ask("Excluir?", &mut input, &mut Vec::new()).unwrap());
}
