#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rwl() -> Command {
    cargo_bin_cmd!("rworklogs")
}

/// Unique temp file path; any existing file is removed.
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworklogs_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Config path inside the temp dir, removed first so every test starts from
/// the built-in defaults.
pub fn setup_test_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworklogs.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `content` to a temp file and return its path.
pub fn write_temp(name: &str, ext: &str, content: &str) -> String {
    let p = temp_out(name, ext);
    fs::write(&p, content).expect("write temp file");
    p
}

fn row(cells: &[&str]) -> String {
    cells.join("\t")
}

/// Pasted table in the sparse layout (column 2 blank, 13 tasks).
pub fn sparse_table() -> String {
    [
        row(&["N", "S", "", "15", "15", "1", "11", "Engraxar / Lubrificar", "Lubrifcar os pontos de graxa (quinta-roda, catracas, rala, etc).", "2400", "Lab.Lub / Comboio", "2402", "Lubrificação", "999396", "Graxa"]),
        row(&["N", "S", "", "15", "15", "2", "48", "Calibrar", "Calibrar pneus e verificar vazamentos.", "700", "Transmissão/Cubos Red.", "773", "Pneu", "1", "SERVIÇO"]),
        row(&["N", "S", "", "15", "15", "3", "10", "Reapertar", "Reapertar porca dos parafusos da rodas, verificar faltantes e substituir se necessário.", "700", "Transmissão/Cubos Red.", "774", "Roda", "1", "SERVIÇO"]),
        row(&["N", "S", "", "15", "15", "4", "16", "Verificar / Testar", "Conferir número de fogo, posição e pneu faltante conforme dados da ultima montagem em OS e verificar integridade dos pneus.", "700", "Transmissão/Cubos Red.", "773", "Pneu", "1", "SERVIÇO"]),
        row(&["N", "S", "", "15", "15", "5", "56", "Medir", "Medir sulcos.", "700", "Transmissão/Cubos Red.", "773", "Pneu", "1", "SERVIÇO"]),
        row(&["N", "S", "", "15", "15", "6", "81", "Inspecionar ", "Inspecionar região da pista com aro (roda) utilizando calibre de folga. Se encontrar folga abrir OS para tratativa.", "700", "Transmissão/Cubos Red.", "774", "Roda", "1", "SERVIÇO"]),
        row(&["N", "S", "", "15", "15", "7", "11", "Engraxar / Lubrificar", "Verificar nível de óleo do sistema hidráulico.", "1700", "Estrutura / Chassis", "1782", "Tanque hidráulico", "999655", "Óleo lubrificante sistema hidráulico"]),
        row(&["N", "S", "", "45", "45", "8", "4", "Revisar", "Abrir tampa de TODOS os cubos. Verificar o travamento da trava aranha e condição da graxa. Substituir se necessário.", "700", "Transmissão/Cubos Red.", "750", "Cubo de roda", "999583", "Tampa"]),
        row(&["N", "S", "", "45", "45", "9", "16", "Verificar / Testar", "Verificar presença de folga de TODOS os cubos. Caso haja, remover rodado e verificar as condições do eixo/rolamento/cubo. Trocar trava/graxa/retentor.", "700", "Transmissão/Cubos Red.", "750", "Cubo de roda", "1", "SERVIÇO"]),
        row(&["N", "S", "", "45", "45", "10", "16", "Verificar / Testar", "Verificar presença de vazamentos na tampa do cubo e na parte interna do flip de roda.", "700", "Transmissão/Cubos Red.", "750", "Cubo de roda", "999583", "Tampa"]),
        row(&["N", "S", "", "45", "45", "11", "16", "Verificar / Testar", "MSS - Verificar a integridade (trincas, desgastes acentuados, danos críticos) dos espelhos da roda . Trocar se necessário.", "700", "Transmissão/Cubos Red.", "774", "Roda", "999343", "Espelho"]),
        row(&["N", "S", "", "45", "45", "12", "1", "Regular", "MSS - Verificar desgaste dos pneus e regular convergência e reapertar parafusos.", "700", "Transmissão/Cubos Red.", "773", "Pneu", "999505", "Pneu - Peças"]),
        row(&["N", "S", "", "45", "45", "13", "16", "Verificar / Testar", "MSS - Verificar a pressão, medir sulcos, conferir número de fogo e verificar emparelhamento dos pneus", "700", "Transmissão/Cubos Red.", "773", "Pneu", "999505", "Pneu - Peças"]),
    ]
    .join("\n")
}

/// Sparse-layout table with four tire tasks (2-5) between two general ones.
pub fn calibration_table() -> String {
    [
        row(&["N", "S", "", "2500", "2500", "1", "11", "Engraxar / Lubrificar", "Lubrificar o equipamento e verificar todos os níveis de oleo e fluidos", "2400", "Lab.Lub / Comboio", "2402", "Lubrificação", "999396", "Graxa"]),
        row(&["N", "S", "", "2500", "2500", "2", "48", "Calibrar", "Calibrar pneus e verificar vazamentos", "700", "Transmissão/Cubos Red.", "773", "Pneu", "1", "SERVIÇO"]),
        row(&["N", "S", "", "2500", "2500", "3", "10", "Reapertar", "Reapertar porca dos parafusos das rodas, verificar faltantes e substituir se necessário", "700", "Transmissão/Cubos Red.", "774", "Roda", "1", "SERVIÇO"]),
        row(&["N", "S", "", "2500", "2500", "4", "16", "Verificar / Testar", "Conferir número de fogo, posição e pneu faltante conforme dados da ultima montagem em OS e verificar integridades dos pneus.", "700", "Transmissão/Cubos Red.", "773", "Pneu", "1", "SERVIÇO"]),
        row(&["N", "S", "", "2500", "2500", "5", "56", "Medir", "Medir sulcos dos pneus", "700", "Transmissão/Cubos Red.", "773", "Pneu", "1", "SERVIÇO"]),
        row(&["N", "S", "", "2500", "2500", "6", "11", "Engraxar / Lubrificar", "Verificar nível do óleo do motor e se necessário, remontar.", "100", "Motor", "103", "Subsistema lubrificação", "999652", "Óleo lubrificante motor"]),
    ]
    .join("\n")
}

/// Pasted table in the standard layout with no tire-service task. Descriptions
/// that carried a line break spill onto continuation rows with no status, so
/// rows 1, 2 and every odd row from 3 to 55 are pending.
pub fn standard_table() -> String {
    [
        row(&["N", "S", "365", "365", "20", "Lavar / Limpar", "Lavagem do equipamento", "4700", "Lavagem Equipamento", "4701", "Lavagem Equipamento", "1", "SERVIÇO"]),
        row(&["N", "S", "365", "365", "117", "Diagnostico", "Testes e verificações (hidráulicos, elétricos, códigos de falha, teste de estanqueidade admissão e arrefecimento, teste de compressão do motor).", "6000", "Diagnóstico ", "6000", "Diagnóstico ", "1", "SERVIÇO"]),
        row(&["N", "S", "365", "365", "6", "Desmontar", "Retirar o elevador da colhedora (recurso especial com Munck)"]),
        row(&["", "4300", "Elevador", "4301", "Estrutura", "1", "SERVIÇO"]),
        row(&["N", "S", "365", "365", "6", "Desmontar", "Desmontar rolos de alimentação e transporte"]),
        row(&["", "4350", "Trem de rolos", "4353", "Rolos", "1", "SERVIÇO"]),
        row(&["N", "S", "365", "365", "16", "Verificar / Testar", "Encavaletar o equipamento no box"]),
        row(&["", "1700", "Estrutura / Chassis", "1780", "Estrutura", "1", "SERVIÇO"]),
        row(&["N", "S", "365", "365", "6", "Desmontar", "Desmontar truck (recurso especial com Munck) - Rodante"]),
        row(&["", "2000", "Rodante", "2008", "Truck", "1", "SERVIÇO"]),
        row(&["N", "S", "365", "365", "16", "Verificar / Testar", "Verificar trincas no eixo através do Líquido Penetrante - Rodante"]),
        row(&["", "2000", "Rodante", "2032", "Eixo Tranversal Truck", "1", "SERVIÇO"]),
        row(&["N", "S", "365", "365", "4", "Revisar", "Realizar regulagem de válvulas do motor"]),
        row(&["", "100", "Motor", "126", "Bloco e cabeçote", "999609", "Valvula"]),
        row(&["N", "S", "365", "365", "75", "Drenar", "Remover e armazenar o líquido de arrefecimento do motor"]),
        row(&["", "200", "Arrefecimento", "247", "Circuito de água", "1", "SERVIÇO"]),
        row(&["N", "S", "365", "365", "20", "Lavar / Limpar", "Realizar higienização dos radiadores"]),
        row(&["", "200", "Arrefecimento", "252", "Quadro / estrutura", "999532", "Radiador"]),
        row(&["N", "S", "365", "365", "14", "Trocar", "Repor o líquido de arrefecimento (trocar se necessário) e realizar sangria do sistema"]),
        row(&["", "200", "Arrefecimento", "247", "Circuito de água", "999124", "Aditivo"]),
        row(&["N", "S", "365", "365", "14", "Trocar", "Trocar terminais (Conector) - Faróis"]),
        row(&["", "4100", "Cabine ", "4102", "Iluminação", "1", "SERVIÇO"]),
        row(&["N", "S", "365", "365", "16", "Verificar / Testar", "Verificar interruptores de posição - Alavanca Multifuncional"]),
        row(&["", "4100", "Cabine ", "4101", "Painel de instrumentos ", "1", "SERVIÇO"]),
        row(&["N", "S", "365", "365", "100", "Testar", "Verificar interruptores de comando - Alavanca Multifuncional"]),
        row(&["", "4100", "Cabine ", "4101", "Painel de instrumentos ", "1", "SERVIÇO"]),
        row(&["N", "S", "365", "365", "75", "Drenar", "Recolher o gás do sistema - Ar Condicionado"]),
        row(&["", "4100", "Cabine ", "4105", "Ar condicionado", "1", "SERVIÇO"]),
        row(&["N", "S", "365", "365", "14", "Trocar", "Trocar mangueiras do compressor - Ar Condicionado"]),
        row(&["", "4100", "Cabine ", "4105", "Ar condicionado", "999445", "Mangueira"]),
        row(&["N", "S", "365", "365", "20", "Lavar / Limpar", "Desmontar e limpar dutos, caixas e filtros - Ar Condicionado"]),
        row(&["", "4100", "Cabine ", "4105", "Ar condicionado", "1", "SERVIÇO"]),
        row(&["N", "S", "365", "365", "16", "Verificar / Testar", "Fazer vácuo, aplicar o gás, testar a pressão - Ar Condicionado"]),
        row(&["", "4100", "Cabine ", "4105", "Ar condicionado", "1", "SERVIÇO"]),
        row(&["N", "S", "365", "365", "16", "Verificar / Testar", "Verificar esguicho de água - Limpador de Parabrisa"]),
        row(&["", "4100", "Cabine ", "4107", "Estrutura", "999432", "Limpador"]),
        row(&["N", "S", "365", "365", "6", "Desmontar", "Desmontar o corte de pontas"]),
        row(&["", "4150", "Despontador/Triturador", "4151", "Estrutura", "1", "SERVIÇO"]),
        row(&["N", "S", "365", "365", "16", "Verificar / Testar", "Verificar espaçamento do divisor de linha (H)"]),
        row(&["", "4200", "Divisor de linha", "4201", "Estrutura", "1", "SERVIÇO"]),
        row(&["N", "S", "365", "365", "6", "Desmontar", "Desmontar divisores de linha"]),
        row(&["", "4200", "Divisor de linha", "4201", "Estrutura", "1", "SERVIÇO"]),
        row(&["N", "S", "365", "365", "80", "Reparar", "Reparar helicoides dos divisores de linha"]),
        row(&["", "4200", "Divisor de linha", "4201", "Estrutura", "1", "SERVIÇO"]),
        row(&["N", "S", "365", "365", "80", "Reparar", "Reparar sapatas dos divisores de linha"]),
        row(&["", "4200", "Divisor de linha", "4201", "Estrutura", "999351", "Estrutura"]),
        row(&["N", "S", "365", "365", "4", "Revisar", "Fazer embuchamento dos divisores de linha"]),
        row(&["", "4200", "Divisor de linha", "4201", "Estrutura", "1", "SERVIÇO"]),
        row(&["N", "S", "365", "365", "14", "Trocar", "Trocar rolamentos dos divisores de linha"]),
        row(&["", "4200", "Divisor de linha", "4205", "Mancais e acoplamentos", "999554", "Rolamento"]),
        row(&["N", "S", "365", "365", "4", "Revisar", "Fazer embuchamento das facas laterais dos divisores de linha"]),
        row(&["", "4200", "Divisor de linha", "4201", "Estrutura", "999322", "Bucha"]),
        row(&["N", "S", "365", "365", "5", "Montar", "Montar divisores de linha"]),
        row(&["", "4200", "Divisor de linha", "4201", "Estrutura", "1", "SERVIÇO"]),
        row(&["N", "S", "365", "365", "4", "Revisar", "Fazer embuchamento do corte de pontas"]),
        row(&["", "4150", "Despontador/Triturador", "4151", "Estrutura", "1", "SERVIÇO"]),
    ]
    .join("\n")
}

/// Plan CSV (`;` separated) with two tire tasks and two general ones.
pub fn plan_csv() -> String {
    [
        "no_seq;de_tarefa;de_sub_sist;de_operacao",
        "1;Lubrificar o equipamento;Lubrificação;Engraxar",
        "2;Calibrar pneus e verificar vazamentos;Pneu;Calibrar",
        "3;Verificar pressão pneumática do sistema de freio;Freio;Verificar",
        "4;Reapertar porca dos parafusos das rodas;Roda;Reapertar",
    ]
    .join("\n")
}
