//! Built-in financial lexicon tables
//!
//! Weights are polarity scores in [0, 1] around the 0.5 midpoint. Declaration
//! order is significant: it breaks salience ties and fixes the order in which
//! industries and markets are reported.

pub const VERSION: &str = "builtin-1";

pub const POSITIVE_TERMS: &[(&str, f64)] = &[
    // Strong
    ("暴涨", 0.95), ("大涨", 0.9), ("飙升", 0.95), ("井喷", 0.9),
    ("创新高", 0.85), ("历史新高", 0.9), ("涨停", 0.85), ("连续涨停", 0.95),
    ("强势", 0.8), ("突破", 0.75), ("反弹", 0.7), ("回升", 0.65),
    // Regular
    ("上涨", 0.7), ("上升", 0.65), ("增长", 0.7), ("利好", 0.75),
    ("看涨", 0.7), ("买入", 0.65), ("增持", 0.7), ("推荐", 0.65),
    ("盈利", 0.7), ("获利", 0.65), ("收益", 0.6), ("红利", 0.65),
    ("分红", 0.65), ("派息", 0.6), ("业绩增长", 0.75), ("超预期", 0.8),
    // Mild
    ("企稳", 0.55), ("稳健", 0.55), ("复苏", 0.6), ("回暖", 0.6),
    ("乐观", 0.6), ("向好", 0.55), ("改善", 0.55), ("提振", 0.6),
    ("利多", 0.6), ("支撑", 0.55), ("机会", 0.55), ("潜力", 0.6),
    // Policy
    ("降息", 0.7), ("降准", 0.7), ("宽松", 0.65), ("刺激", 0.6),
    ("减税", 0.7), ("补贴", 0.65), ("扶持", 0.65), ("鼓励", 0.6),
    // Market confidence
    ("牛市", 0.85), ("多头", 0.7), ("做多", 0.65), ("加仓", 0.65),
    ("吸筹", 0.6), ("主力进场", 0.7), ("资金流入", 0.7), ("北向资金流入", 0.75),
];

pub const NEGATIVE_TERMS: &[(&str, f64)] = &[
    // Strong
    ("暴跌", 0.05), ("崩盘", 0.0), ("跳水", 0.1), ("闪崩", 0.05),
    ("跌停", 0.1), ("连续跌停", 0.0), ("熔断", 0.05), ("恐慌", 0.1),
    ("爆仓", 0.05), ("踩踏", 0.1), ("血洗", 0.05), ("腰斩", 0.1),
    // Regular
    ("下跌", 0.3), ("下滑", 0.35), ("下行", 0.35), ("利空", 0.25),
    ("看跌", 0.3), ("卖出", 0.35), ("减持", 0.3), ("抛售", 0.25),
    ("亏损", 0.25), ("损失", 0.3), ("赔钱", 0.2), ("套牢", 0.25),
    ("业绩下滑", 0.25), ("不及预期", 0.3), ("业绩暴雷", 0.15),
    // Mild
    ("震荡", 0.45), ("调整", 0.45), ("回调", 0.45), ("走弱", 0.4),
    ("承压", 0.4), ("疲软", 0.4), ("低迷", 0.35), ("萎靡", 0.35),
    ("谨慎", 0.45), ("观望", 0.45), ("风险", 0.4), ("不确定", 0.45),
    // Policy
    ("加息", 0.35), ("收紧", 0.35), ("监管", 0.4), ("限制", 0.35),
    ("整顿", 0.35), ("打压", 0.25), ("处罚", 0.3), ("退市", 0.2),
    // Market fear
    ("熊市", 0.15), ("空头", 0.3), ("做空", 0.35), ("减仓", 0.35),
    ("出逃", 0.25), ("资金流出", 0.3), ("北向资金流出", 0.25), ("外资撤离", 0.2),
];

pub const NEUTRAL_TERMS: &[&str] = &[
    "横盘", "整理", "盘整", "窄幅波动", "平稳",
    "维持", "持平", "不变", "持续", "保持",
    "关注", "留意", "注意", "跟踪", "观察",
];

pub const INDUSTRIES: &[(&str, &[&str])] = &[
    ("technology", &["芯片", "半导体", "人工智能", "AI", "大数据", "云计算", "5G", "物联网", "软件", "互联网"]),
    ("new_energy", &["光伏", "风电", "锂电池", "储能", "氢能", "电动车", "充电桩", "碳中和", "绿色能源"]),
    ("consumer", &["白酒", "食品饮料", "家电", "零售", "电商", "旅游", "餐饮", "化妆品", "服装"]),
    ("healthcare", &["医疗器械", "创新药", "疫苗", "中药", "生物医药", "CXO", "医美", "健康"]),
    ("finance", &["银行", "保险", "券商", "信托", "基金", "资管", "金融科技", "支付"]),
    ("real_estate", &["房地产", "物业", "建材", "装修", "家居", "钢铁", "水泥"]),
    ("manufacturing", &["汽车", "机械", "航空", "军工", "造船", "工程机械", "智能制造"]),
];

/// Intensity multipliers; -1.0 marks negation
pub const MODIFIERS: &[(&str, f64)] = &[
    // Intensifiers
    ("非常", 1.3), ("极其", 1.4), ("极度", 1.5), ("严重", 1.3),
    ("大幅", 1.3), ("显著", 1.2), ("明显", 1.2), ("持续", 1.1),
    // Softeners
    ("略微", 0.7), ("稍微", 0.7), ("小幅", 0.8), ("轻微", 0.7),
    ("可能", 0.8), ("或许", 0.8), ("也许", 0.8), ("预计", 0.9),
    // Negation
    ("不", -1.0), ("没有", -1.0), ("未", -1.0), ("非", -1.0),
];

pub const MARKET_INDICATORS: &[(&str, &str)] = &[
    ("上证指数", "A-share"),
    ("深证成指", "A-share"),
    ("创业板指", "A-share"),
    ("科创50", "A-share"),
    ("沪深300", "A-share"),
    ("中证500", "A-share"),
    ("恒生指数", "Hong Kong"),
    ("恒生科技", "Hong Kong"),
    ("纳斯达克", "US"),
    ("道琼斯", "US"),
    ("标普500", "US"),
];
