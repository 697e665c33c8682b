//! Fixed reference tables for the assets and rights section.
//!
//! Codes follow the Receita Federal layout for "Bens e Direitos": a two-digit
//! group and a two-digit item code inside the group.

use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::Serialize;

/// One (group, code, description) entry of the reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReferenceEntry {
    pub group: &'static str,
    pub code: &'static str,
    pub description: &'static str,
}

const fn entry(group: &'static str, code: &'static str, description: &'static str) -> ReferenceEntry {
    ReferenceEntry { group, code, description }
}

/// All known (group, code) pairs.
pub static REFERENCE_ENTRIES: &[ReferenceEntry] = &[
    entry("01", "01", "Prédio residencial"),
    entry("01", "02", "Prédio comercial"),
    entry("01", "03", "Galpão"),
    entry("01", "11", "Apartamento"),
    entry("01", "12", "Casa"),
    entry("01", "13", "Terreno"),
    entry("01", "14", "Imóvel rural (ver item Imóvel rural)"),
    entry("01", "15", "Sala ou conjunto"),
    entry("01", "16", "Construção"),
    entry("01", "17", "Benfeitorias (ver item Benfeitorias)"),
    entry("01", "18", "Loja"),
    entry("01", "99", "Outros bens imóveis"),
    entry("02", "01", "Veículo automotor terrestre: caminhão, automóvel, moto etc."),
    entry("02", "02", "Aeronave"),
    entry("02", "03", "Embarcação"),
    entry("02", "04", "Bem relacionado à atividade autônoma com o exercício de profissão"),
    entry("02", "05", "Joia, quadro, objeto de arte, de coleção, antiguidade etc."),
    entry("02", "99", "Outros bens móveis"),
    entry("03", "01", "Ações (inclusive as listadas em bolsa)"),
    entry("03", "02", "Quotas ou quinhões de capital"),
    entry("03", "99", "Outras participações societárias"),
    entry("04", "01", "Depósito em conta poupança"),
    entry("04", "02", "Títulos públicos e privados sujeitos à tributação (Tesouro Direto, CDB, RDB e outros)"),
    entry("04", "03", "Títulos isentos de tributação (LCI, LCA, CRI, CRA, LIG, Debêntures de Infraestrutura e outros)"),
    entry("04", "04", "Ativos negociados em bolsa no Brasil (BDRs, opções e outros – exceto ações e fundos)"),
    entry("04", "05", "Ouro, ativo financeiro"),
    entry("04", "99", "Outras aplicações e investimentos"),
    entry("05", "01", "Empréstimos concedidos"),
    entry("05", "02", "Crédito decorrente de alienação"),
    entry("05", "99", "Outros créditos"),
    entry("06", "01", "Depósito em conta-corrente ou conta pagamento"),
    entry("06", "10", "Dinheiro em espécie – moeda nacional"),
    entry("06", "11", "Dinheiro em espécie – moeda estrangeira"),
    entry("06", "99", "Outros depósitos à vista"),
    entry("07", "01", "Fundos de Investimentos sujeitos à tributação periódica (come-cotas)"),
    entry("07", "02", "Fundos de Investimento nas Cadeias Produtivas Agroindustriais (Fiagro)"),
    entry("07", "03", "Fundos de Investimento Imobiliário (FII)"),
    entry("07", "04", "Fundos de Investimento em Ações e Fundos Mútuos de Privatização – FGTS"),
    entry("07", "05", "Fundos de Investimento em Ações – Mercado de Acesso"),
    entry("07", "06", "Fundos de Investimento em Participações, em Cotas de Fundos de Investimento em Participações e em Empresas Emergentes"),
    entry("07", "07", "FIP-IE e FIP-PD&I"),
    entry("07", "08", "Fundos de Índice de Renda Fixa – Lei 13.043/14"),
    entry("07", "09", "Demais ETFs"),
    entry("07", "10", "FIDC"),
    entry("07", "11", "Fundos sem tributação periódica"),
    entry("07", "99", "Outros fundos"),
    entry("08", "01", "Criptoativo Bitcoin (BTC)"),
    entry("08", "02", "Altcoins (ETH, XRP, BCH, LTC etc.)"),
    entry("08", "03", "Stablecoins (USDT, USDC, BRZ, BUSD, DAI, TUSD, GUSD, PAX, PAXG etc.)"),
    entry("08", "10", "NFTs"),
    entry("08", "99", "Outros criptoativos"),
    entry("99", "01", "Licença e concessão especiais"),
    entry("99", "02", "Título de clube e assemelhado"),
    entry("99", "03", "Direito de autor, de inventor e patente"),
    entry("99", "04", "Direito de lavra e assemelhado"),
    entry("99", "05", "Consórcio não contemplado (ver item Consórcios)"),
    entry("99", "06", "VGBL – Vida Gerador de Benefício Livre"),
    entry("99", "07", "Juros Sobre Capital Próprio Creditado, mas não Pago"),
    entry("99", "99", "Outros bens e direitos"),
];

/// Group names, one per two-digit group.
pub static GROUP_NAMES: &[(&str, &str)] = &[
    ("01", "Bens Imóveis"),
    ("02", "Bens Móveis"),
    ("03", "Participações Societárias"),
    ("04", "Aplicações e Investimentos Financeiros"),
    ("05", "Créditos"),
    ("06", "Depósitos à vista e Numerário"),
    ("07", "Fundos"),
    ("08", "Criptoativos"),
    ("99", "Outros Bens e Direitos"),
];

lazy_static! {
    /// Descriptions keyed by group, then by code.
    static ref DESCRIPTIONS: HashMap<&'static str, HashMap<&'static str, &'static str>> = {
        let mut map: HashMap<&'static str, HashMap<&'static str, &'static str>> = HashMap::new();
        for e in REFERENCE_ENTRIES {
            map.entry(e.group).or_default().insert(e.code, e.description);
        }
        map
    };
}

/// Look up the description of a (group, code) pair.
pub fn describe(group: &str, code: &str) -> Option<&'static str> {
    DESCRIPTIONS.get(group)?.get(code).copied()
}

/// Look up the name of a group.
pub fn group_name(group: &str) -> Option<&'static str> {
    GROUP_NAMES
        .iter()
        .find(|(g, _)| *g == group)
        .map(|(_, name)| *name)
}
